//! Block-comment lint rules with auto-fix support.
//!
//! The plugin surface an ESLint-shaped host consumes: a [`RuleRegistry`]
//! mapping rule names to option-validated rule values, the [`Rule`] trait
//! they implement, and [`presets`] mirroring the plugin's exported
//! configurations. [`lint_source`] is a convenience driver for hosts (and
//! tests) that do not bring their own tokenizer.

pub mod fix;
pub mod presets;
pub mod registry;
pub mod rules;

pub use registry::{FromOptions, OptionsError, RuleRegistry};

use blocklint_diagnostics::Diagnostic;
use blocklint_js_comments::{Comment, scan_comments};
use blocklint_source_file::{LineIndex, SourceCode};
use blocklint_text_size::TextRange;

/// Context provided to rules during checking.
pub struct CheckContext<'a> {
    source: &'a str,
    line_index: LineIndex,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line_index: LineIndex::from_source_text(source),
        }
    }

    /// Get the source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get the cached line index.
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Get the source code helper for line/column info.
    pub fn source_code(&self) -> SourceCode<'a, '_> {
        SourceCode::new(self.source, &self.line_index)
    }

    /// Get text at a given range.
    pub fn text_at(&self, range: TextRange) -> &'a str {
        &self.source[range]
    }
}

/// Trait for lint rules over comment tokens.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// The rule's name (the ESLint rule id, without plugin prefix).
    fn name(&self) -> &'static str;

    /// Check a comment token for violations.
    fn check(&self, ctx: &CheckContext, comment: &Comment) -> Vec<Diagnostic>;
}

/// Result of linting a source unit.
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all fixable diagnostics.
    pub fn fixable(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.fix.is_some())
    }
}

/// Run `rules` over every comment token of `source`.
///
/// Each token's verdict depends only on its own text and static context,
/// so iteration order never affects the result.
pub fn lint_source(source: &str, rules: &[Box<dyn Rule>]) -> LintResult {
    let ctx = CheckContext::new(source);
    let mut result = LintResult::new();
    for comment in scan_comments(source) {
        for rule in rules {
            result.diagnostics.extend(rule.check(&ctx, &comment));
        }
    }
    result
}
