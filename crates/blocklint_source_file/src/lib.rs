//! Source text helpers: line/column mapping and character probing.
//!
//! The probing functions in [`probe`] answer the context questions the
//! comment rules ask ("what is the first non-space character before this
//! token?") without any knowledge of the token model, so they stay easy
//! to test in isolation.

mod line_index;
pub mod probe;
mod source_code;

pub use line_index::LineIndex;
pub use source_code::{LineColumn, SourceCode, Span};
