use nodefx::param::{ColorGradient, DecodeOptions, RandomCurveLayout, Result, Rgba, ScalarCurve, TruncationPolicy};

/// Decoder flags shared by every command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DecodeArgs {
	/// Read the max curve of `randomCurve` values at fixed field 68.
	#[arg(long = "legacy-layout")]
	pub legacy_layout: bool,
	/// Fail on incomplete trailing burst groups instead of dropping them.
	#[arg(long = "strict-bursts")]
	pub strict_bursts: bool,
	/// Maximum declared sample or key count.
	#[arg(long = "max-samples")]
	pub max_samples: Option<usize>,
}

impl DecodeArgs {
	pub(crate) fn options(&self) -> DecodeOptions {
		let mut opt = DecodeOptions::default();
		if self.legacy_layout {
			opt.random_curve_layout = RandomCurveLayout::Legacy;
		}
		if self.strict_bursts {
			opt.truncated_bursts = TruncationPolicy::Reject;
		}
		if let Some(max_samples) = self.max_samples {
			opt.max_samples = max_samples;
		}
		opt
	}
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

pub(crate) fn render_color(color: Rgba) -> String {
	format!("({}, {}, {}, {})", color.r, color.g, color.b, color.a)
}

/// One-line summary of a scalar curve.
pub(crate) fn curve_summary(curve: &ScalarCurve) -> String {
	match curve {
		ScalarCurve::Constant { value } => format!("constant {}", value.as_f32()),
		ScalarCurve::RandomBetweenConstants { min, max } => format!("random {}..{}", min.as_f32(), max.as_f32()),
		ScalarCurve::Curve { curve, multiplier } => format!("curve x{multiplier} ({} samples)", curve.keys.len()),
		ScalarCurve::RandomBetweenCurves { min, multiplier, .. } => format!("random curves x{multiplier} ({} samples)", min.keys.len()),
	}
}

/// One-line summary of a color gradient.
pub(crate) fn gradient_summary(gradient: &ColorGradient) -> String {
	match gradient {
		ColorGradient::SingleColor { color } => format!("color {}", render_color(*color)),
		ColorGradient::Gradient { gradient } => format!("gradient {:?} ({} keys)", gradient.mode, gradient.keys.len()),
		other => format!("{} (no data)", other.mode_label()),
	}
}
