use serde::Serialize;

use crate::param::{ParamError, Result};

/// Linear RGBA color with float channels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rgba {
	/// Red channel.
	pub r: f32,
	/// Green channel.
	pub g: f32,
	/// Blue channel.
	pub b: f32,
	/// Alpha channel.
	pub a: f32,
}

impl Rgba {
	/// Build a color from channels.
	pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
		Self { r, g, b, a }
	}

	/// Parse a brace-wrapped tuple such as `{1,0,0.5,1}` found at field `field`.
	///
	/// Braces are stripped wherever they appear and exactly four channels are required.
	pub fn parse(raw: &str, field: usize) -> Result<Self> {
		let stripped: String = raw.chars().filter(|ch| *ch != '{' && *ch != '}').collect();
		let mut channels = [0.0_f32; 4];
		let mut count = 0_usize;
		for part in stripped.split(',') {
			if count == channels.len() {
				return Err(ParamError::malformed(field, "color tuple {r,g,b,a}", Some(raw)));
			}
			channels[count] = part
				.trim()
				.parse::<f32>()
				.map_err(|_| ParamError::malformed(field, "color tuple {r,g,b,a}", Some(raw)))?;
			count += 1;
		}
		if count != channels.len() {
			return Err(ParamError::malformed(field, "color tuple {r,g,b,a}", Some(raw)));
		}

		let [r, g, b, a] = channels;
		Ok(Self { r, g, b, a })
	}

	/// Channel-wise linear interpolation towards `other`.
	pub fn lerp(self, other: Self, t: f32) -> Self {
		Self {
			r: self.r + (other.r - self.r) * t,
			g: self.g + (other.g - self.g) * t,
			b: self.b + (other.b - self.b) * t,
			a: self.a + (other.a - self.a) * t,
		}
	}
}
