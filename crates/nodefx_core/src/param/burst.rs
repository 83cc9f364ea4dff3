use serde::Serialize;

use crate::param::{DecodeOptions, Fields, Number, ParamError, Result, ScalarCurve, TruncationPolicy, decode_scalar_curve};

const GROUP_FIELDS: usize = 4;
const LEGACY_GROUP_FIELDS: usize = 5;

/// One timed emission event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurstEvent {
	/// Emission time in seconds.
	pub time: f32,
	/// How many times the burst fires.
	pub cycle_count: i16,
	/// Seconds between cycles.
	pub repeat_interval: f32,
	/// Particles emitted per cycle.
	pub count: ScalarCurve,
}

/// Ordered burst events decoded from one parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BurstList {
	/// Events in authored order.
	pub events: Vec<BurstEvent>,
	/// Trailing fields dropped because they did not form a complete group.
	pub dropped_fields: usize,
}

impl BurstList {
	/// Number of events.
	pub fn len(&self) -> usize {
		self.events.len()
	}

	/// Whether no events were decoded.
	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}
}

/// Decode `:`-delimited bursts, four fields per event: `time:cycles:interval:count`.
///
/// The count field is itself a scalar parameter (for example `constant;float;5`).
/// An empty string means no bursts.
pub fn decode_bursts(raw: &str, opt: &DecodeOptions) -> Result<BurstList> {
	if raw.is_empty() {
		return Ok(BurstList::default());
	}
	let fields = Fields::new(raw, ':');
	let (groups, dropped_fields) = group_count(&fields, GROUP_FIELDS, opt)?;

	let mut events = Vec::with_capacity(groups);
	for index in 0..groups {
		let base = index * GROUP_FIELDS;
		let count_raw = fields.text(base + 3, "burst count")?;
		let count = decode_scalar_curve(count_raw, opt).map_err(|source| ParamError::Burst {
			index,
			source: Box::new(source),
		})?;
		events.push(BurstEvent {
			time: fields.f32(base)?,
			cycle_count: fields.i16(base + 1)?,
			repeat_interval: fields.f32(base + 2)?,
			count,
		});
	}

	Ok(BurstList { events, dropped_fields })
}

/// Decode the older `;`-delimited burst layout, five fields per event:
/// `time;minCount;maxCount;cycles;interval`.
///
/// Each count becomes a random choice between the two integer bounds.
pub fn decode_legacy_bursts(raw: &str, opt: &DecodeOptions) -> Result<BurstList> {
	if raw.is_empty() {
		return Ok(BurstList::default());
	}
	let fields = Fields::new(raw, ';');
	let (groups, dropped_fields) = group_count(&fields, LEGACY_GROUP_FIELDS, opt)?;

	let mut events = Vec::with_capacity(groups);
	for index in 0..groups {
		let base = index * LEGACY_GROUP_FIELDS;
		let min = fields.i16(base + 1)?;
		let max = fields.i16(base + 2)?;
		events.push(BurstEvent {
			time: fields.f32(base)?,
			cycle_count: fields.i16(base + 3)?,
			repeat_interval: fields.f32(base + 4)?,
			count: ScalarCurve::RandomBetweenConstants {
				min: Number::Int(i32::from(min)),
				max: Number::Int(i32::from(max)),
			},
		});
	}

	Ok(BurstList { events, dropped_fields })
}

fn group_count(fields: &Fields<'_>, group: usize, opt: &DecodeOptions) -> Result<(usize, usize)> {
	let complete = fields.len() / group;
	let leftover = fields.len() % group;
	if leftover == 0 {
		return Ok((complete, 0));
	}

	match opt.truncated_bursts {
		TruncationPolicy::Reject => Err(ParamError::TruncatedGroup { complete, leftover }),
		TruncationPolicy::Drop => {
			tracing::warn!(complete, leftover, "dropping incomplete trailing burst group");
			Ok((complete, leftover))
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::param::{BurstList, DecodeOptions, Number, ParamError, ScalarCurve, TruncationPolicy, decode_bursts, decode_legacy_bursts};

	fn decode(raw: &str) -> BurstList {
		decode_bursts(raw, &DecodeOptions::default()).expect("bursts decode")
	}

	#[test]
	fn two_groups_with_nested_constant_counts() {
		let bursts = decode("0.0:3:1.0:constant;float;5:2.0:2:0.5:constant;float;3");

		assert_eq!(bursts.len(), 2);
		assert_eq!(bursts.dropped_fields, 0);

		let first = &bursts.events[0];
		assert_eq!(first.time, 0.0);
		assert_eq!(first.cycle_count, 3);
		assert_eq!(first.repeat_interval, 1.0);
		assert_eq!(first.count, ScalarCurve::constant(5.0));

		let second = &bursts.events[1];
		assert_eq!(second.time, 2.0);
		assert_eq!(second.cycle_count, 2);
		assert_eq!(second.repeat_interval, 0.5);
		assert_eq!(second.count, ScalarCurve::constant(3.0));
	}

	#[test]
	fn nested_count_may_be_a_curve() {
		let bursts = decode("1.5:1:0:curve;float;2;10;0;1");
		let ScalarCurve::Curve { curve, multiplier } = &bursts.events[0].count else {
			panic!("expected curve count");
		};
		assert_eq!(*multiplier, 10.0);
		assert_eq!(curve.keys.len(), 2);
	}

	#[test]
	fn five_fields_yield_one_group_and_drop_the_rest() {
		let bursts = decode("0:1:0:constant;int;4:9");
		assert_eq!(bursts.len(), 1);
		assert_eq!(bursts.dropped_fields, 1);
		assert_eq!(bursts.events[0].count, ScalarCurve::Constant { value: Number::Int(4) });
	}

	#[test]
	fn reject_policy_surfaces_truncation() {
		let opt = DecodeOptions {
			truncated_bursts: TruncationPolicy::Reject,
			..DecodeOptions::default()
		};
		let err = decode_bursts("0:1:0:constant;int;4:9", &opt).expect_err("truncated stream should fail");
		assert!(matches!(err, ParamError::TruncatedGroup { complete: 1, leftover: 1 }));
	}

	#[test]
	fn empty_input_has_no_bursts() {
		assert!(decode("").is_empty());
	}

	#[test]
	fn short_input_yields_no_groups() {
		let bursts = decode("0:1");
		assert!(bursts.is_empty());
		assert_eq!(bursts.dropped_fields, 2);
	}

	#[test]
	fn bad_nested_count_reports_burst_index() {
		let err = decode_bursts("0:1:0:constant;float;5:1:1:0:wobble;float;1", &DecodeOptions::default()).expect_err("bad count should fail");
		let ParamError::Burst { index, source } = err else {
			panic!("expected burst error, got {err}");
		};
		assert_eq!(index, 1);
		assert!(matches!(*source, ParamError::UnknownVariant { .. }));
	}

	#[test]
	fn cycle_count_must_fit_int16() {
		let err = decode_bursts("0:70000:0:constant;int;1", &DecodeOptions::default()).expect_err("cycle overflow should fail");
		assert!(matches!(err, ParamError::MalformedValue { field: 1, .. }));
	}

	#[test]
	fn legacy_layout_maps_min_max_counts() {
		let bursts = decode_legacy_bursts("0.5;10;20;2;0.25;3;1;1;1;0", &DecodeOptions::default()).expect("legacy bursts decode");
		assert_eq!(bursts.len(), 2);
		let first = &bursts.events[0];
		assert_eq!(first.time, 0.5);
		assert_eq!(first.cycle_count, 2);
		assert_eq!(first.repeat_interval, 0.25);
		assert_eq!(
			first.count,
			ScalarCurve::RandomBetweenConstants {
				min: Number::Int(10),
				max: Number::Int(20),
			}
		);
	}

	#[test]
	fn legacy_layout_reject_policy_surfaces_truncation() {
		let opt = DecodeOptions {
			truncated_bursts: TruncationPolicy::Reject,
			..DecodeOptions::default()
		};
		let err = decode_legacy_bursts("0.5;10;20;2;0.25;3;1", &opt).expect_err("truncated legacy stream should fail");
		assert!(matches!(err, ParamError::TruncatedGroup { complete: 1, leftover: 2 }));

		let bursts = decode_legacy_bursts("0.5;10;20;2;0.25;3;1", &DecodeOptions::default()).expect("drop policy keeps full groups");
		assert_eq!(bursts.len(), 1);
		assert_eq!(bursts.dropped_fields, 2);
	}

	#[test]
	fn decoding_twice_yields_equal_lists() {
		let raw = "0:1:0:randomConstant;int;1;5";
		assert_eq!(decode(raw), decode(raw));
	}
}
