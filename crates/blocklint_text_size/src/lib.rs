//! Byte-offset value types used throughout blocklint.
//!
//! Offsets and ranges are measured in UTF-8 bytes and stored as `u32`,
//! which is plenty for any source file a linter will ever see.

mod range;
mod size;

pub use range::TextRange;
pub use size::TextSize;
