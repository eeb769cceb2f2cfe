//! no-single-line-comment-block rule implementation.
//!
//! Single-line comments should not be in a block comment: a plain block
//! comment whose content fits one line is rewritten to `//` notation,
//! and a malformed multi-line (or short JSDoc) block is rewritten to a
//! well-formed `/* ... */` block with one `*`-prefixed line per content
//! line.
//!
//! JSDoc comments are never collapsed to line notation, because external
//! tooling keys off the `/** */` delimiter; they are normalized to the
//! canonical multi-line shape instead (or exempted entirely with
//! `allowJSDoc`).
//!
//! ## Examples
//!
//! ```js
//! /* one line */          // violation: use `// one line`
//! /* two
//!    lines */             // violation: use a well-formed block
//! /*
//!  * two
//!  * lines
//!  */                     // ok
//! /* eslint-disable x */  // ok: tooling directive
//! ```

use blocklint_diagnostics::{Diagnostic, Edit, Fix, FixAvailability, Violation};
use blocklint_js_comments::Comment;
use blocklint_source_file::probe::{self, SKIP_SPACES};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::common;
use crate::registry::{FromOptions, OptionsError};
use crate::{CheckContext, Rule};

/// Violation: block comment content fits a single line comment.
#[derive(Debug, Clone)]
pub struct UseSingleLineNotation;

impl Violation for UseSingleLineNotation {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Sometimes;

    fn message_id(&self) -> &'static str {
        "useSingleLineNotation"
    }

    fn message(&self) -> String {
        "Use line comment notation instead.".to_string()
    }
}

/// Violation: block comment should take the canonical multi-line shape.
#[derive(Debug, Clone)]
pub struct UseMultiLineBlock;

impl Violation for UseMultiLineBlock {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Always;

    fn message_id(&self) -> &'static str {
        "useMultiLineBlock"
    }

    fn message(&self) -> String {
        "Use multi-line block instead.".to_string()
    }
}

/// Host-facing option schema. Unknown keys and wrong types are rejected
/// at the boundary, before any comment is checked.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Options {
    #[serde(rename = "allowJSDoc")]
    allow_js_doc: bool,
    #[serde(rename = "allowInEmptyBraces")]
    allow_in_empty_braces: bool,
    ignore: Vec<String>,
    #[serde(rename = "ignorePatterns")]
    ignore_patterns: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_js_doc: false,
            allow_in_empty_braces: true,
            ignore: Vec::new(),
            ignore_patterns: Vec::new(),
        }
    }
}

/// Configuration for the no-single-line-comment-block rule.
///
/// Immutable for the duration of an analysis pass; the extra directive
/// and ignore patterns are compiled once here.
#[derive(Debug)]
pub struct NoSingleLineCommentBlock {
    allow_js_doc: bool,
    allow_in_empty_braces: bool,
    extra_directives: Option<Regex>,
    ignore_patterns: Vec<Regex>,
}

impl Default for NoSingleLineCommentBlock {
    fn default() -> Self {
        Self {
            allow_js_doc: false,
            allow_in_empty_braces: true,
            extra_directives: None,
            ignore_patterns: Vec::new(),
        }
    }
}

impl FromOptions for NoSingleLineCommentBlock {
    const RULE_NAME: &'static str = "no-single-line-comment-block";

    fn from_options(options: Option<&Value>) -> Result<Self, OptionsError> {
        let raw = match options {
            None => Options::default(),
            Some(value) => serde_json::from_value(value.clone()).map_err(|source| {
                OptionsError::InvalidOptions {
                    rule: Self::RULE_NAME,
                    source,
                }
            })?,
        };

        let extra_directives =
            common::build_directive_regex(&raw.ignore).map_err(|source| {
                OptionsError::InvalidPattern {
                    pattern: raw.ignore.join("|"),
                    source,
                }
            })?;

        let mut ignore_patterns = Vec::with_capacity(raw.ignore_patterns.len());
        for pattern in &raw.ignore_patterns {
            let compiled = common::compile_ignore_pattern(pattern).map_err(|source| {
                OptionsError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            ignore_patterns.push(compiled);
        }

        Ok(Self {
            allow_js_doc: raw.allow_js_doc,
            allow_in_empty_braces: raw.allow_in_empty_braces,
            extra_directives,
            ignore_patterns,
        })
    }
}

impl Rule for NoSingleLineCommentBlock {
    fn name(&self) -> &'static str {
        Self::RULE_NAME
    }

    fn check(&self, ctx: &CheckContext, comment: &Comment) -> Vec<Diagnostic> {
        if !comment.is_block() {
            return vec![];
        }
        if comment.is_jsdoc() {
            self.check_jsdoc(ctx, comment)
        } else {
            self.check_normal(ctx, comment)
        }
    }
}

impl NoSingleLineCommentBlock {
    fn has_special_cases(&self, text: &str) -> bool {
        common::has_special_cases(text, self.extra_directives.as_ref(), &self.ignore_patterns)
    }

    /// JSDoc comments: never collapsed; a block shorter than the minimum
    /// well-formed shape (open line, content line, close line) is
    /// expanded to it.
    fn check_jsdoc(&self, ctx: &CheckContext, comment: &Comment) -> Vec<Diagnostic> {
        if self.allow_js_doc {
            return vec![];
        }

        // Strip the JSDoc `*` after the opening delimiter and a single
        // `*` before the closing one, so `/** x **/` and `/** x */`
        // read the same.
        let mut text = &comment.text[1..];
        if let Some(stripped) = text.strip_suffix('*') {
            text = stripped;
        }

        // The threshold counts raw physical lines: three lines means the
        // delimiters already sit on their own lines around the content.
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.len() >= 3 || self.has_special_cases(text) {
            return vec![];
        }

        common::trim_comment_lines(&mut lines);
        let indent = probe::indent_at(ctx.source(), ctx.line_index(), comment.range.start());
        let replacement = build_multi_line_block("/**", &lines, &indent);

        vec![
            Diagnostic::new(UseMultiLineBlock, comment.range).with_fix(Fix::safe_edit(
                Edit::range_replacement(replacement, comment.range),
            )),
        ]
    }

    fn check_normal(&self, ctx: &CheckContext, comment: &Comment) -> Vec<Diagnostic> {
        let text = comment.text.as_str();
        let mut lines: Vec<&str> = text.split('\n').collect();
        // A blank first line means the `/*` already sits on its own line.
        let multi_line_style = lines[0].trim().is_empty();
        common::trim_comment_lines(&mut lines);

        if (multi_line_style && lines.len() > 1) || self.has_special_cases(text) {
            return vec![];
        }

        if lines.len() == 1 {
            self.report_single_line(ctx, comment, lines[0])
        } else {
            self.report_multi_line(ctx, comment, &lines)
        }
    }

    fn report_single_line(
        &self,
        ctx: &CheckContext,
        comment: &Comment,
        line: &str,
    ) -> Vec<Diagnostic> {
        let source = ctx.source();

        // `{ /* note */ }` is a deliberate inline-annotation idiom.
        if self.allow_in_empty_braces
            && probe::prev_non_space(source, comment.range.start(), SKIP_SPACES) == Some('{')
            && probe::next_non_space(source, comment.range.end(), SKIP_SPACES) == Some('}')
        {
            return vec![];
        }

        let mut diagnostic = Diagnostic::new(UseSingleLineNotation, comment.range);

        // A line comment swallows the rest of its line, so the rewrite is
        // only safe when nothing follows the closing delimiter.
        if probe::is_line_end_after(source, comment.range.end()) {
            let mut content = line.trim();
            if let Some(rest) = content.strip_prefix('*') {
                content = rest.trim();
            }
            let replacement = if content.is_empty() {
                "//".to_string()
            } else {
                format!("// {content}")
            };
            diagnostic.set_fix(Fix::safe_edit(Edit::range_replacement(
                replacement,
                comment.range,
            )));
        }

        vec![diagnostic]
    }

    fn report_multi_line(
        &self,
        ctx: &CheckContext,
        comment: &Comment,
        lines: &[&str],
    ) -> Vec<Diagnostic> {
        let indent = probe::indent_at(ctx.source(), ctx.line_index(), comment.range.start());
        let replacement = build_multi_line_block("/*", lines, &indent);

        vec![
            Diagnostic::new(UseMultiLineBlock, comment.range).with_fix(Fix::safe_edit(
                Edit::range_replacement(replacement, comment.range),
            )),
        ]
    }
}

/// Build the canonical multi-line block: opening delimiter on its own
/// line, one ` * `-prefixed line per content line, closing `*/` indented
/// to the comment's current column. Indentation is recomputed from the
/// source position, not inherited from the comment's internal lines, so
/// the rewrite is idempotent.
fn build_multi_line_block(opening: &str, lines: &[&str], indent: &str) -> String {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(opening.to_string());
    for line in lines {
        let mut line = line.trim();
        if let Some(rest) = line.strip_prefix("* ") {
            line = rest;
        } else if let Some(rest) = line.strip_prefix('*') {
            line = rest;
        }
        if line.is_empty() {
            out.push(format!("{indent} *"));
        } else {
            out.push(format!("{indent} * {line}"));
        }
    }
    out.push(format!("{indent} */"));
    out.join("\n")
}
