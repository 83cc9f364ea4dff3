/// Burst list decode command.
pub mod bursts;
/// Scalar curve decode command.
pub mod curve;
/// Color gradient decode command.
pub mod gradient;
/// Effect definition inspection command.
pub mod inspect;
/// Shared flags and output helpers.
pub mod util;
