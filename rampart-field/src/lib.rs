pub mod color;
pub mod error;
pub mod field;
pub mod histogram;
pub mod range;

/// Spans smaller than this are treated as zero-width.
pub const ZERO_TOLERANCE: f32 = 1e-12;
