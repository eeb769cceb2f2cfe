//! Shared helpers for comment rules: meaningful-line trimming and
//! directive exemption matching.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

lazy_static! {
    /// Tooling directives that exempt a comment from rewriting. Matched
    /// at line start with at most one leading space, as a prefix, so
    /// `eslint-disable-next-line` is covered by `eslint-disable`.
    static ref BUILTIN_DIRECTIVES: Regex = Regex::new(
        "(?m)^ ?(?:eslint-disable|eslint-enable|eslint-env|eslint|global|c8|istanbul)"
    )
    .expect("builtin directive pattern is valid");
}

/// A line that carries no content once surrounding lines are considered:
/// blank, or a lone `*`.
pub(crate) fn is_empty_comment_line(line: &str) -> bool {
    matches!(line.trim(), "" | "*")
}

/// Drop trailing then leading empty lines, always keeping at least one.
/// What remains is the comment's meaningful line sequence.
pub(crate) fn trim_comment_lines(lines: &mut Vec<&str>) {
    while lines.len() > 1 && is_empty_comment_line(lines[lines.len() - 1]) {
        lines.pop();
    }
    while lines.len() > 1 && is_empty_comment_line(lines[0]) {
        lines.remove(0);
    }
}

/// Compile extra `ignore` keywords into one line-start prefix pattern.
/// Keywords are literal, so they are escaped before compilation.
pub(crate) fn build_directive_regex(keywords: &[String]) -> Result<Option<Regex>, regex::Error> {
    if keywords.is_empty() {
        return Ok(None);
    }
    let escaped: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    Regex::new(&format!("(?m)^ ?(?:{})", escaped.join("|"))).map(Some)
}

/// Compile one `ignorePatterns` entry with multi-line semantics, matching
/// the host convention of testing patterns against the full comment text.
pub(crate) fn compile_ignore_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).multi_line(true).build()
}

/// True when `text` contains an exempting directive line or matches any
/// extra pattern. Stateless: every call starts a fresh match.
pub(crate) fn has_special_cases(
    text: &str,
    extra_directives: Option<&Regex>,
    ignore_patterns: &[Regex],
) -> bool {
    if BUILTIN_DIRECTIVES.is_match(text) {
        return true;
    }
    if extra_directives.is_some_and(|re| re.is_match(text)) {
        return true;
    }
    ignore_patterns.iter().any(|re| re.is_match(text))
}
