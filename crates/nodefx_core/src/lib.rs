//! Public library API for decoding NodeFX effect parameter strings.

/// Parameter tokenizing, curve/gradient/burst decoding, and parameter sources.
pub mod param;
