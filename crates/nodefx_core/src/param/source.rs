use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::param::{BurstList, ColorGradient, DecodeOptions, ParamError, Result, ScalarCurve, decode_bursts, decode_gradient, decode_scalar_curve};

/// Keyed store of raw parameter strings, one set per emitter.
///
/// Implementations only hand out text; interpretation stays in the decoders.
pub trait ParameterSource {
	/// Number of emitters in the effect.
	fn emitter_count(&self) -> usize;

	/// Number of named parameters defined on `emitter`.
	fn parameter_count(&self, emitter: usize) -> Result<usize>;

	/// Raw text of value `index` of parameter `name` on `emitter`.
	fn read_parameter(&self, emitter: usize, name: &str, index: usize) -> Result<&str>;

	/// Read a float value.
	fn read_f32(&self, emitter: usize, name: &str, index: usize) -> Result<f32> {
		let raw = self.read_parameter(emitter, name, index)?;
		raw.trim().parse::<f32>().map_err(|_| invalid(emitter, name, index, "float", raw))
	}

	/// Read an integer value.
	fn read_i32(&self, emitter: usize, name: &str, index: usize) -> Result<i32> {
		let raw = self.read_parameter(emitter, name, index)?;
		raw.trim().parse::<i32>().map_err(|_| invalid(emitter, name, index, "integer", raw))
	}

	/// Read a flag written as an integer (non-zero is true) or as `true`/`false`.
	fn read_bool(&self, emitter: usize, name: &str, index: usize) -> Result<bool> {
		let raw = self.read_parameter(emitter, name, index)?;
		match raw.trim() {
			"true" | "True" => Ok(true),
			"false" | "False" => Ok(false),
			other => other
				.parse::<i32>()
				.map(|value| value != 0)
				.map_err(|_| invalid(emitter, name, index, "flag", raw)),
		}
	}

	/// Read `len` float components stored as values `0..len`.
	///
	/// Absent or empty components read as zero; the first component must exist.
	fn read_vector(&self, emitter: usize, name: &str, len: usize) -> Result<Vec<f32>> {
		let mut out = Vec::with_capacity(len);
		for index in 0..len {
			let raw = match self.read_parameter(emitter, name, index) {
				Ok(raw) => raw,
				Err(err) if err.is_missing() && index > 0 => "",
				Err(err) => return Err(err),
			};
			if raw.trim().is_empty() {
				out.push(0.0);
				continue;
			}
			out.push(raw.trim().parse::<f32>().map_err(|_| invalid(emitter, name, index, "float", raw))?);
		}
		Ok(out)
	}

	/// Read and decode a scalar curve parameter.
	fn read_curve(&self, emitter: usize, name: &str, opt: &DecodeOptions) -> Result<ScalarCurve> {
		decode_scalar_curve(self.read_parameter(emitter, name, 0)?, opt)
	}

	/// Read and decode a color gradient parameter.
	fn read_gradient(&self, emitter: usize, name: &str, opt: &DecodeOptions) -> Result<ColorGradient> {
		decode_gradient(self.read_parameter(emitter, name, 0)?, opt)
	}

	/// Read and decode a burst list parameter.
	fn read_bursts(&self, emitter: usize, name: &str, opt: &DecodeOptions) -> Result<BurstList> {
		decode_bursts(self.read_parameter(emitter, name, 0)?, opt)
	}
}

/// Parameters of one emitter, keyed by attribute name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmitterDefinition {
	/// Ordered raw values per attribute.
	#[serde(default, deserialize_with = "attribute_values")]
	pub attributes: BTreeMap<String, Vec<String>>,
}

impl EmitterDefinition {
	/// Empty emitter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add or replace an attribute.
	pub fn with<I, S>(mut self, name: &str, values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.attributes.insert(name.to_owned(), values.into_iter().map(Into::into).collect());
		self
	}
}

/// In-memory effect definition, loadable from JSON:
/// `{"emitters": [{"attributes": {"main_duration": ["5"]}}]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemorySource {
	#[serde(default)]
	emitters: Vec<EmitterDefinition>,
}

impl MemorySource {
	/// Definition without emitters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an emitter.
	pub fn with_emitter(mut self, emitter: EmitterDefinition) -> Self {
		self.emitters.push(emitter);
		self
	}

	/// Parse a JSON effect definition.
	pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
		Ok(serde_json::from_slice(bytes)?)
	}

	/// Read and parse a JSON effect definition file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		Self::from_json_slice(&bytes)
	}

	fn emitter(&self, emitter: usize) -> Result<&EmitterDefinition> {
		self.emitters.get(emitter).ok_or(ParamError::EmitterOutOfRange {
			emitter,
			count: self.emitters.len(),
		})
	}
}

impl ParameterSource for MemorySource {
	fn emitter_count(&self) -> usize {
		self.emitters.len()
	}

	fn parameter_count(&self, emitter: usize) -> Result<usize> {
		Ok(self.emitter(emitter)?.attributes.len())
	}

	fn read_parameter(&self, emitter: usize, name: &str, index: usize) -> Result<&str> {
		self.emitter(emitter)?
			.attributes
			.get(name)
			.and_then(|values| values.get(index))
			.map(String::as_str)
			.ok_or_else(|| ParamError::ParameterNotFound {
				emitter,
				name: name.to_owned(),
				index,
			})
	}
}

fn invalid(emitter: usize, name: &str, index: usize, expected: &'static str, raw: &str) -> ParamError {
	ParamError::InvalidParameter {
		emitter,
		name: name.to_owned(),
		index,
		expected,
		found: Box::from(raw),
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
	Text(String),
	Number(serde_json::Number),
	Flag(bool),
}

impl From<RawValue> for String {
	fn from(value: RawValue) -> Self {
		match value {
			RawValue::Text(text) => text,
			RawValue::Number(number) => number.to_string(),
			RawValue::Flag(flag) => u8::from(flag).to_string(),
		}
	}
}

fn attribute_values<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, Vec<String>>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = BTreeMap::<String, Vec<RawValue>>::deserialize(deserializer)?;
	Ok(raw
		.into_iter()
		.map(|(name, values)| (name, values.into_iter().map(String::from).collect()))
		.collect())
}

#[cfg(test)]
mod tests;
