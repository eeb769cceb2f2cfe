//! Lint rules organized by category.

pub mod comments;

// Re-export all rules
pub use comments::NoSingleLineCommentBlock;
