use serde::Serialize;

use crate::param::curve::sample_position;
use crate::param::{DecodeOptions, Fields, ParamError, Result, Rgba};

/// How colors between gradient keys are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientMode {
	/// Linear blend between neighbouring keys.
	#[default]
	Blend,
	/// Hold each key's color without blending.
	Fixed,
}

impl GradientMode {
	/// Map the integer mode code used in authored data.
	pub fn from_code(code: i32) -> Option<Self> {
		match code {
			0 => Some(Self::Blend),
			1 => Some(Self::Fixed),
			_ => None,
		}
	}
}

/// One color key of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientKey {
	/// Normalized position in `[0, 1]`.
	pub position: f32,
	/// Key color, alpha included.
	pub color: Rgba,
}

/// Color varying over `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Gradient {
	/// Interpolation mode.
	pub mode: GradientMode,
	/// Keys in increasing position order.
	pub keys: Vec<GradientKey>,
}

impl Gradient {
	/// Evaluate the gradient at `t` (clamped to `[0, 1]`).
	pub fn evaluate(&self, t: f32) -> Rgba {
		let t = t.clamp(0.0, 1.0);
		let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
			return Rgba::default();
		};

		match self.mode {
			GradientMode::Fixed => self.keys.iter().find(|key| key.position >= t).unwrap_or(last).color,
			GradientMode::Blend => {
				if t <= first.position {
					return first.color;
				}
				for pair in self.keys.windows(2) {
					let (a, b) = (pair[0], pair[1]);
					if t <= b.position {
						let span = b.position - a.position;
						if span <= f32::EPSILON {
							return b.color;
						}
						return a.color.lerp(b.color, (t - a.position) / span);
					}
				}
				last.color
			}
		}
	}
}

/// Color parameter: single color, gradient, or one of the declared random modes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorGradient {
	/// One color everywhere.
	SingleColor {
		/// The color.
		color: Rgba,
	},
	/// Declared by the format, carries no data.
	RandomBetweenColors,
	/// Sampled gradient.
	Gradient {
		/// The gradient.
		gradient: Gradient,
	},
	/// Declared by the format, carries no data.
	RandomBetweenGradients,
}

impl ColorGradient {
	/// Whether the value carries decodable data.
	pub fn is_implemented(&self) -> bool {
		matches!(self, Self::SingleColor { .. } | Self::Gradient { .. })
	}

	/// Evaluate at `t`. `None` for the random modes, which carry no data.
	pub fn evaluate(&self, t: f32) -> Option<Rgba> {
		match self {
			Self::SingleColor { color } => Some(*color),
			Self::Gradient { gradient } => Some(gradient.evaluate(t)),
			Self::RandomBetweenColors | Self::RandomBetweenGradients => None,
		}
	}

	/// Short label of the active mode.
	pub fn mode_label(&self) -> &'static str {
		match self {
			Self::SingleColor { .. } => "single_color",
			Self::RandomBetweenColors => "random_between_colors",
			Self::Gradient { .. } => "gradient",
			Self::RandomBetweenGradients => "random_between_gradients",
		}
	}
}

/// Decode a `;`-delimited color parameter such as `gradient;;2;0;{1,0,0,1};{0,0,1,1}`.
///
/// Field 1 is not interpreted. The random modes decode to their marker variants.
pub fn decode_gradient(raw: &str, opt: &DecodeOptions) -> Result<ColorGradient> {
	let fields = Fields::new(raw, ';');
	let tag = fields.text(0, "variant tag")?;

	match tag {
		"constant" => {
			let color = Rgba::parse(fields.text(2, "color tuple {r,g,b,a}")?, 2)?;
			Ok(ColorGradient::SingleColor { color })
		}
		"gradient" => {
			let count = fields.count(2, opt.max_samples)?;
			let code = fields.i32(3)?;
			let mode = GradientMode::from_code(code).ok_or_else(|| ParamError::malformed(3, "gradient mode (0|1)", fields.get(3)))?;

			fields.require(4, count, "color tuple {r,g,b,a}")?;
			let mut keys = Vec::with_capacity(count);
			for idx in 0..count {
				let field = 4 + idx;
				let color = Rgba::parse(fields.text(field, "color tuple {r,g,b,a}")?, field)?;
				keys.push(GradientKey {
					position: sample_position(idx, count),
					color,
				});
			}
			Ok(ColorGradient::Gradient {
				gradient: Gradient { mode, keys },
			})
		}
		"randomConstant" => {
			tracing::debug!(raw, "random color mode carries no data");
			Ok(ColorGradient::RandomBetweenColors)
		}
		"randomGradient" => {
			tracing::debug!(raw, "random gradient mode carries no data");
			Ok(ColorGradient::RandomBetweenGradients)
		}
		other => Err(ParamError::UnknownVariant { tag: other.to_owned() }),
	}
}
