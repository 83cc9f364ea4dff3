use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ParamError>;

/// Errors produced while decoding parameter strings and reading parameter sources.
#[derive(Debug, Error)]
pub enum ParamError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Effect definition is not valid JSON for the expected layout.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Leading variant tag is not one the decoder knows.
	#[error("unknown variant tag {tag:?}")]
	UnknownVariant {
		/// Field 0 as written.
		tag: String,
	},
	/// A field is missing or does not parse as the expected value.
	#[error("malformed value at field {field}: expected {expected}, found {}", found_label(.found))]
	MalformedValue {
		/// Zero-based field index inside the token stream.
		field: usize,
		/// Human-readable description of the expected value.
		expected: &'static str,
		/// Offending text, or `None` when the field is absent.
		found: Option<Box<str>>,
	},
	/// Declared sample or key count exceeds the configured ceiling.
	#[error("sample count {count} exceeds limit {max}")]
	SampleCountTooLarge {
		/// Declared count.
		count: usize,
		/// Maximum permitted count.
		max: usize,
	},
	/// Variant is part of the format but has no decoding behavior.
	#[error("not implemented: {what}")]
	NotImplemented {
		/// Name of the unsupported variant or kind.
		what: &'static str,
	},
	/// Burst token stream ends with an incomplete group.
	#[error("truncated burst group: {complete} complete group(s), {leftover} trailing field(s)")]
	TruncatedGroup {
		/// Number of complete groups before the remainder.
		complete: usize,
		/// Number of trailing fields that do not form a group.
		leftover: usize,
	},
	/// Nested count of a burst failed to decode.
	#[error("burst {index}: {source}")]
	Burst {
		/// Zero-based burst index.
		index: usize,
		/// Nested decode failure.
		#[source]
		source: Box<ParamError>,
	},
	/// Emitter index is outside the definition.
	#[error("emitter {emitter} out of range (count={count})")]
	EmitterOutOfRange {
		/// Requested emitter index.
		emitter: usize,
		/// Number of emitters available.
		count: usize,
	},
	/// Named parameter value does not exist.
	#[error("parameter {name}[{index}] not found on emitter {emitter}")]
	ParameterNotFound {
		/// Emitter index.
		emitter: usize,
		/// Parameter name.
		name: String,
		/// Value index inside the parameter.
		index: usize,
	},
	/// Stored parameter value does not parse as the expected type.
	#[error("parameter {name}[{index}] on emitter {emitter}: expected {expected}, found {found:?}")]
	InvalidParameter {
		/// Emitter index.
		emitter: usize,
		/// Parameter name.
		name: String,
		/// Value index inside the parameter.
		index: usize,
		/// Human-readable description of the expected value.
		expected: &'static str,
		/// Offending text.
		found: Box<str>,
	},
}

impl ParamError {
	pub(crate) fn malformed(field: usize, expected: &'static str, found: Option<&str>) -> Self {
		Self::MalformedValue {
			field,
			expected,
			found: found.map(Box::from),
		}
	}

	/// Whether the error means the value simply is not there.
	pub fn is_missing(&self) -> bool {
		matches!(self, Self::ParameterNotFound { .. })
	}
}

fn found_label(found: &Option<Box<str>>) -> String {
	match found {
		Some(item) => format!("{item:?}"),
		None => "nothing".to_owned(),
	}
}
