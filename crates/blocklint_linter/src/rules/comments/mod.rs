//! Rules about comment formatting.

mod common;
pub mod no_single_line_comment_block;

pub use no_single_line_comment_block::NoSingleLineCommentBlock;
