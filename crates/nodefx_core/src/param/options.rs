/// Where the second curve block of a `randomCurve` value starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomCurveLayout {
	/// Second block immediately follows the first.
	#[default]
	Packed,
	/// Second block starts at fixed field 68, as written by older exporters.
	Legacy,
}

impl RandomCurveLayout {
	/// Field index where the legacy layout places the max curve.
	pub const LEGACY_MAX_OFFSET: usize = 68;
	/// Largest curve the legacy layout holds before the two blocks overlap.
	pub const LEGACY_MAX_SAMPLES: usize = Self::LEGACY_MAX_OFFSET - 4;

	/// First field of the max curve for a curve of `samples` samples.
	pub fn max_offset(self, samples: usize) -> usize {
		match self {
			Self::Packed => samples.saturating_add(4),
			Self::Legacy => Self::LEGACY_MAX_OFFSET,
		}
	}
}

/// What to do with trailing burst fields that do not form a full group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
	/// Drop the partial group and log a warning.
	#[default]
	Drop,
	/// Fail with [`crate::param::ParamError::TruncatedGroup`].
	Reject,
}

/// Behavior switches and limits for parameter decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Placement of the max curve for `randomCurve` values.
	pub random_curve_layout: RandomCurveLayout,
	/// Maximum declared sample or key count.
	pub max_samples: usize,
	/// Handling of incomplete trailing burst groups.
	pub truncated_bursts: TruncationPolicy,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			random_curve_layout: RandomCurveLayout::Packed,
			max_samples: 1024,
			truncated_bursts: TruncationPolicy::Drop,
		}
	}
}

impl DecodeOptions {
	/// Preset for definitions authored with the older exporter.
	pub fn legacy() -> Self {
		Self {
			random_curve_layout: RandomCurveLayout::Legacy,
			max_samples: 1024,
			truncated_bursts: TruncationPolicy::Drop,
		}
	}
}
