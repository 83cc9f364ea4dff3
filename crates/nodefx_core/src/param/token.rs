use std::str::FromStr;

use crate::param::{ParamError, Result};

/// Split `raw` on every occurrence of `delimiter`.
///
/// Fields are not trimmed, and an empty input yields a single empty field.
pub fn split(raw: &str, delimiter: char) -> Vec<&str> {
	raw.split(delimiter).collect()
}

/// Positional view over the fields of one parameter string.
///
/// Every typed read reports failures against the absolute field index so
/// errors point at the offending token.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
	items: Vec<&'a str>,
}

impl<'a> Fields<'a> {
	/// Tokenize `raw` on `delimiter`.
	pub fn new(raw: &'a str, delimiter: char) -> Self {
		Self {
			items: split(raw, delimiter),
		}
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether there are no fields. Never true for fields built by [`Fields::new`].
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Raw field text, if present.
	pub fn get(&self, idx: usize) -> Option<&'a str> {
		self.items.get(idx).copied()
	}

	/// Raw field text, or a missing-field error describing what was expected.
	pub fn text(&self, idx: usize, expected: &'static str) -> Result<&'a str> {
		self.get(idx).ok_or_else(|| ParamError::malformed(idx, expected, None))
	}

	/// Parse a 32-bit float.
	pub fn f32(&self, idx: usize) -> Result<f32> {
		self.parse(idx, "float")
	}

	/// Parse a 32-bit signed integer.
	pub fn i32(&self, idx: usize) -> Result<i32> {
		self.parse(idx, "integer")
	}

	/// Parse a 16-bit signed integer.
	pub fn i16(&self, idx: usize) -> Result<i16> {
		self.parse(idx, "int16")
	}

	/// Parse a sample or key count: an integer of at least one.
	pub fn count(&self, idx: usize, max: usize) -> Result<usize> {
		let raw = self.text(idx, "sample count >= 1")?;
		let count = raw
			.trim()
			.parse::<usize>()
			.ok()
			.filter(|count| *count >= 1)
			.ok_or_else(|| ParamError::malformed(idx, "sample count >= 1", Some(raw)))?;
		if count > max {
			return Err(ParamError::SampleCountTooLarge { count, max });
		}
		Ok(count)
	}

	/// Check that the `count` fields starting at `offset` all exist.
	///
	/// On failure the error names the first absent field.
	pub fn require(&self, offset: usize, count: usize, expected: &'static str) -> Result<()> {
		let fits = offset.checked_add(count).is_some_and(|end| end <= self.items.len());
		if fits {
			return Ok(());
		}
		Err(ParamError::malformed(offset.max(self.items.len()), expected, None))
	}

	fn parse<T: FromStr>(&self, idx: usize, expected: &'static str) -> Result<T> {
		let raw = self.text(idx, expected)?;
		raw.trim().parse::<T>().map_err(|_| ParamError::malformed(idx, expected, Some(raw)))
	}
}
