use serde::Serialize;

use crate::param::{Fields, ParamError, Result};

/// Numeric kind declared in field 1 of a scalar parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
	/// 32-bit float values.
	Float,
	/// 32-bit integer values.
	Int,
	/// Vector values. Declared by the format but never decodable.
	Vector,
}

impl NumberKind {
	/// Parse the kind field at `idx`.
	pub fn parse(fields: &Fields<'_>, idx: usize) -> Result<Self> {
		match fields.text(idx, "numeric kind")? {
			"float" => Ok(Self::Float),
			"int" => Ok(Self::Int),
			"vector" => Ok(Self::Vector),
			other => Err(ParamError::malformed(idx, "numeric kind (float|int|vector)", Some(other))),
		}
	}

	/// Read one value of this kind from field `idx`.
	pub fn read(self, fields: &Fields<'_>, idx: usize) -> Result<Number> {
		match self {
			Self::Float => fields.f32(idx).map(Number::Float),
			Self::Int => fields.i32(idx).map(Number::Int),
			Self::Vector => Err(ParamError::NotImplemented { what: "vector values" }),
		}
	}
}

/// Scalar value that remembers whether it was written as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
	/// Float value.
	Float(f32),
	/// Integer value, kept exact.
	Int(i32),
}

impl Number {
	/// Value widened to `f32`.
	pub fn as_f32(self) -> f32 {
		match self {
			Self::Float(value) => value,
			Self::Int(value) => value as f32,
		}
	}
}
