mod burst;
mod color;
mod curve;
mod emitter;
mod error;
mod gradient;
mod number;
mod options;
mod source;
mod token;

/// Burst list types and decoders.
pub use burst::{BurstEvent, BurstList, decode_bursts, decode_legacy_bursts};
/// RGBA color tuple.
pub use color::Rgba;
/// Scalar curve types and decoder.
pub use curve::{CurveKey, SampledCurve, ScalarCurve, decode_scalar_curve};
/// Per-emitter inspection types and entry point.
pub use emitter::{EMITTER_PARAMS, EmitterReport, FieldOutcome, FieldReport, ParamKind, ParamSpec, ParamValue, inspect_emitter};
/// Error and result aliases.
pub use error::{ParamError, Result};
/// Color gradient types and decoder.
pub use gradient::{ColorGradient, Gradient, GradientKey, GradientMode, decode_gradient};
/// Numeric field kinds and values.
pub use number::{Number, NumberKind};
/// Decoder configuration.
pub use options::{DecodeOptions, RandomCurveLayout, TruncationPolicy};
/// Parameter source collaborator and in-memory implementation.
pub use source::{EmitterDefinition, MemorySource, ParameterSource};
/// Field tokenizer.
pub use token::{Fields, split};
