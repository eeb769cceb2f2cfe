//! Character probes around a byte offset.
//!
//! Comment rules need to know what sits immediately before or after a
//! token once insignificant characters are skipped. The skip set is a
//! parameter because "insignificant" differs per question: the
//! empty-braces check skips plain spaces only, while the end-of-line
//! check also skips the `\r` of a CRLF terminator.

use blocklint_text_size::TextSize;

use crate::LineIndex;

/// Skip set for plain horizontal padding.
pub const SKIP_SPACES: &[char] = &[' '];

/// Skip set for padding plus the `\r` of a CRLF line ending.
pub const SKIP_SPACES_AND_CR: &[char] = &[' ', '\r'];

/// First character before `offset` that is not in `skip`, walking backwards.
pub fn prev_non_space(source: &str, offset: TextSize, skip: &[char]) -> Option<char> {
    source[..usize::from(offset)]
        .chars()
        .rev()
        .find(|c| !skip.contains(c))
}

/// First character at or after `offset` that is not in `skip`.
pub fn next_non_space(source: &str, offset: TextSize, skip: &[char]) -> Option<char> {
    source[usize::from(offset)..]
        .chars()
        .find(|c| !skip.contains(c))
}

/// True when nothing but padding separates `offset` from the end of its
/// line (or the end of the text). Spaces and a CRLF `\r` are padding.
pub fn is_line_end_after(source: &str, offset: TextSize) -> bool {
    matches!(
        next_non_space(source, offset, SKIP_SPACES_AND_CR),
        Some('\n') | None
    )
}

/// Indentation string for a token starting at `offset`: one space per
/// character between the line start and the token.
///
/// The column count is used rather than the literal character run so a
/// token preceded by non-whitespace (for example an opening brace) still
/// gets a space-only indent.
pub fn indent_at(source: &str, index: &LineIndex, offset: TextSize) -> String {
    let line_start = index.line_start(index.line_of(offset));
    let column = source[usize::from(line_start)..usize::from(offset)]
        .chars()
        .count();
    " ".repeat(column)
}
