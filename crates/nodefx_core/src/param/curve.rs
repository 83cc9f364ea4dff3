use serde::Serialize;

use crate::param::{DecodeOptions, Fields, Number, NumberKind, ParamError, RandomCurveLayout, Result};

/// One sample of a reconstructed curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveKey {
	/// Normalized position in `[0, 1]`.
	pub position: f32,
	/// Sampled value.
	pub value: f32,
}

/// Curve reconstructed from evenly spaced samples over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SampledCurve {
	/// Samples in increasing position order.
	pub keys: Vec<CurveKey>,
}

impl SampledCurve {
	/// Build a curve whose sample `i` sits at [`sample_position`]`(i, values.len())`.
	pub fn from_samples(values: &[f32]) -> Self {
		let count = values.len();
		let keys = values
			.iter()
			.enumerate()
			.map(|(idx, value)| CurveKey {
				position: sample_position(idx, count),
				value: *value,
			})
			.collect();
		Self { keys }
	}

	/// Evaluate at normalized position `t` (clamped) with linear interpolation.
	pub fn evaluate(&self, t: f32) -> f32 {
		let t = t.clamp(0.0, 1.0);
		let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
			return 0.0;
		};
		if t <= first.position {
			return first.value;
		}
		if t >= last.position {
			return last.value;
		}

		for pair in self.keys.windows(2) {
			let (a, b) = (pair[0], pair[1]);
			if t <= b.position {
				let span = b.position - a.position;
				if span <= f32::EPSILON {
					return b.value;
				}
				return a.value + (b.value - a.value) * ((t - a.position) / span);
			}
		}
		last.value
	}
}

/// Position of sample `idx` out of `count` evenly spaced samples.
///
/// The first sample sits at 0.0 and the last at 1.0; a single sample sits at 0.0.
pub(crate) fn sample_position(idx: usize, count: usize) -> f32 {
	if count <= 1 {
		return 0.0;
	}
	idx as f32 / (count - 1) as f32
}

/// Scalar parameter that is constant, random, or varies over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ScalarCurve {
	/// Single value.
	Constant {
		/// The value.
		value: Number,
	},
	/// Value picked between two constants.
	RandomBetweenConstants {
		/// Lower constant.
		min: Number,
		/// Upper constant.
		max: Number,
	},
	/// Sampled curve scaled by a multiplier.
	Curve {
		/// Sampled shape.
		curve: SampledCurve,
		/// Scale applied to every sample.
		multiplier: f32,
	},
	/// Value picked between two sampled curves.
	RandomBetweenCurves {
		/// Lower curve.
		min: SampledCurve,
		/// Upper curve.
		max: SampledCurve,
		/// Scale applied to both curves.
		multiplier: f32,
	},
}

impl ScalarCurve {
	/// Shorthand for a float constant.
	pub fn constant(value: f32) -> Self {
		Self::Constant { value: Number::Float(value) }
	}

	/// Evaluate at position `t`, using `lerp` in `[0, 1]` to pick between the random bounds.
	pub fn evaluate(&self, t: f32, lerp: f32) -> f32 {
		let lerp = lerp.clamp(0.0, 1.0);
		match self {
			Self::Constant { value } => value.as_f32(),
			Self::RandomBetweenConstants { min, max } => {
				let (min, max) = (min.as_f32(), max.as_f32());
				min + (max - min) * lerp
			}
			Self::Curve { curve, multiplier } => curve.evaluate(t) * multiplier,
			Self::RandomBetweenCurves { min, max, multiplier } => {
				let (min, max) = (min.evaluate(t), max.evaluate(t));
				(min + (max - min) * lerp) * multiplier
			}
		}
	}

	/// Short label of the active mode.
	pub fn mode_label(&self) -> &'static str {
		match self {
			Self::Constant { .. } => "constant",
			Self::RandomBetweenConstants { .. } => "random_between_constants",
			Self::Curve { .. } => "curve",
			Self::RandomBetweenCurves { .. } => "random_between_curves",
		}
	}
}

/// Decode a `;`-delimited scalar parameter such as `curve;float;4;1.0;0;0.3;0.6;1`.
pub fn decode_scalar_curve(raw: &str, opt: &DecodeOptions) -> Result<ScalarCurve> {
	let fields = Fields::new(raw, ';');
	decode_fields(&fields, opt)
}

fn decode_fields(fields: &Fields<'_>, opt: &DecodeOptions) -> Result<ScalarCurve> {
	let tag = fields.text(0, "variant tag")?;
	if !matches!(tag, "constant" | "randomConstant" | "curve" | "randomCurve") {
		return Err(ParamError::UnknownVariant { tag: tag.to_owned() });
	}

	let kind = NumberKind::parse(fields, 1)?;
	if kind == NumberKind::Vector {
		return Err(ParamError::NotImplemented { what: "vector values" });
	}

	match tag {
		"constant" => Ok(ScalarCurve::Constant { value: kind.read(fields, 2)? }),
		"randomConstant" => Ok(ScalarCurve::RandomBetweenConstants {
			min: kind.read(fields, 2)?,
			max: kind.read(fields, 3)?,
		}),
		"curve" => {
			let samples = fields.count(2, opt.max_samples)?;
			let multiplier = fields.f32(3)?;
			let curve = read_curve(fields, kind, 4, samples)?;
			Ok(ScalarCurve::Curve { curve, multiplier })
		}
		_ => {
			let samples = fields.count(2, opt.max_samples)?;
			if opt.random_curve_layout == RandomCurveLayout::Legacy && samples > RandomCurveLayout::LEGACY_MAX_SAMPLES {
				return Err(ParamError::malformed(2, "legacy sample count <= 64", fields.get(2)));
			}
			let multiplier = fields.f32(3)?;
			let min = read_curve(fields, kind, 4, samples)?;
			let max = read_curve(fields, kind, opt.random_curve_layout.max_offset(samples), samples)?;
			Ok(ScalarCurve::RandomBetweenCurves { min, max, multiplier })
		}
	}
}

fn read_curve(fields: &Fields<'_>, kind: NumberKind, offset: usize, samples: usize) -> Result<SampledCurve> {
	fields.require(offset, samples, "curve sample")?;
	let mut values = Vec::with_capacity(samples);
	for idx in offset..offset + samples {
		values.push(kind.read(fields, idx)?.as_f32());
	}
	Ok(SampledCurve::from_samples(&values))
}

#[cfg(test)]
mod tests;
