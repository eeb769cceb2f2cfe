//! Fixture tests for the no-single-line-comment-block rule: every
//! invalid case asserts the message id, the reported line/column span,
//! and the fixed output (or that no fix is offered); fixed output is
//! re-linted to confirm the rewrite is idempotent.

use blocklint_linter::fix::apply_fixes;
use blocklint_linter::{CheckContext, Rule, RuleRegistry, lint_source};
use serde_json::{Value, json};

fn rule(options: Option<&Value>) -> Box<dyn Rule> {
    RuleRegistry::builtin()
        .create_rule("no-single-line-comment-block", options)
        .unwrap()
}

/// Expected single violation: message id, (line, column) span ends, and
/// the whole-source output after fixing (`None` = no fix offered).
struct Expected {
    message_id: &'static str,
    start: (u32, u32),
    end: (u32, u32),
    output: Option<&'static str>,
}

fn check_invalid(source: &str, options: Option<Value>, expected: &Expected) {
    let result = lint_source(source, &[rule(options.as_ref())]);
    assert_eq!(result.diagnostics.len(), 1, "one violation for {source:?}");
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.kind.message_id, expected.message_id, "{source:?}");

    let ctx = CheckContext::new(source);
    let span = ctx.source_code().span(diagnostic.range);
    assert_eq!(
        (span.start.line, span.start.column),
        expected.start,
        "start of {source:?}"
    );
    assert_eq!(
        (span.end.line, span.end.column),
        expected.end,
        "end of {source:?}"
    );

    match expected.output {
        Some(output) => {
            let fixed = apply_fixes(source, &result.diagnostics);
            assert_eq!(fixed, output, "fix output for {source:?}");
            // Applying the fix and re-running must yield a clean result.
            let recheck = lint_source(&fixed, &[rule(options.as_ref())]);
            assert!(
                recheck.diagnostics.is_empty(),
                "fix for {source:?} is not idempotent: {fixed:?}"
            );
        }
        None => {
            assert!(!diagnostic.fixable(), "no fix expected for {source:?}");
        }
    }
}

fn check_valid(source: &str, options: Option<Value>) {
    let result = lint_source(source, &[rule(options.as_ref())]);
    assert!(
        result.diagnostics.is_empty(),
        "expected no violations for {source:?}, got {:?}",
        result.diagnostics
    );
}

#[test]
fn invalid_single_line_in_block_shape() {
    check_invalid(
        "/*\n* Only one line in this block\n*/",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (3, 3),
            output: Some("// Only one line in this block"),
        },
    );
}

#[test]
fn invalid_star_only_block() {
    check_invalid(
        "/*\n* \n*/",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (3, 3),
            output: Some("//"),
        },
    );
}

#[test]
fn invalid_empty_block() {
    check_invalid(
        "/*\n*/",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (2, 3),
            output: Some("//"),
        },
    );
}

#[test]
fn invalid_empty_jsdoc() {
    check_invalid(
        "/**\n*/",
        None,
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 1),
            end: (2, 3),
            output: Some("/**\n *\n */"),
        },
    );
}

#[test]
fn invalid_padded_single_line_block() {
    check_invalid(
        "/*\n\n *\n* Only one line in this block\n * \n \n */",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (7, 4),
            output: Some("// Only one line in this block"),
        },
    );
}

#[test]
fn invalid_content_shares_closing_line() {
    check_invalid(
        "/*\n Only one line in this block */",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (2, 32),
            output: Some("// Only one line in this block"),
        },
    );
}

#[test]
fn invalid_content_shares_opening_line() {
    check_invalid(
        "/* Only one line in this block \n*/",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (2, 3),
            output: Some("// Only one line in this block"),
        },
    );
}

#[test]
fn invalid_two_lines_sharing_delimiters() {
    check_invalid(
        "/* Two lines\n in this one line block \n*/",
        None,
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 1),
            end: (3, 3),
            output: Some("/*\n * Two lines\n * in this one line block\n */"),
        },
    );
}

#[test]
fn invalid_two_lines_with_star_prefix() {
    check_invalid(
        "/* Two lines\n * in this one line block \n*/",
        None,
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 1),
            end: (3, 3),
            output: Some("/*\n * Two lines\n * in this one line block\n */"),
        },
    );
}

#[test]
fn invalid_blank_star_line_preserved() {
    check_invalid(
        "/* Two lines\n *\n * in this one line block \n*/",
        None,
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 1),
            end: (4, 3),
            output: Some("/*\n * Two lines\n *\n * in this one line block\n */"),
        },
    );
}

#[test]
fn invalid_double_star_close() {
    check_invalid(
        "/* Only one line in this block \n**/",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (2, 4),
            output: Some("// Only one line in this block"),
        },
    );
}

#[test]
fn invalid_plain_single_line() {
    check_invalid(
        "/* Only one line in this block (single line) */",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (1, 48),
            output: Some("// Only one line in this block (single line)"),
        },
    );
}

#[test]
fn invalid_single_line_jsdoc() {
    check_invalid(
        "/** Only one line in this JSDoc (single line) */",
        None,
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 1),
            end: (1, 49),
            output: Some("/**\n * Only one line in this JSDoc (single line)\n */"),
        },
    );
}

#[test]
fn invalid_single_line_jsdoc_double_star_close() {
    check_invalid(
        "/** Only one line in this JSDoc (single line) **/",
        None,
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 1),
            end: (1, 50),
            output: Some("/**\n * Only one line in this JSDoc (single line)\n */"),
        },
    );
}

#[test]
fn invalid_two_line_jsdoc() {
    check_invalid(
        "/** \n* Only one line in this JSDoc (single line) **/",
        None,
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 1),
            end: (2, 48),
            output: Some("/**\n * Only one line in this JSDoc (single line)\n */"),
        },
    );
}

#[test]
fn invalid_two_line_jsdoc_unspaced_star() {
    check_invalid(
        "/** \n*Only one line in this JSDoc (single line) **/",
        None,
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 1),
            end: (2, 47),
            output: Some("/**\n * Only one line in this JSDoc (single line)\n */"),
        },
    );
}

#[test]
fn invalid_unknown_directive_like_comment() {
    check_invalid(
        "/* cspell:ignore this */",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (1, 25),
            output: Some("// cspell:ignore this"),
        },
    );
}

#[test]
fn invalid_keyword_not_at_line_start() {
    check_invalid(
        "/* should fail as it ends with cspell:ignore this */",
        Some(json!({
            "allowJSDoc": false,
            "allowInEmptyBraces": true,
            "ignore": ["cspell"],
            "ignorePatterns": ["(?:RegExp)(?: |)$"],
        })),
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (1, 53),
            output: Some("// should fail as it ends with cspell:ignore this"),
        },
    );
}

#[test]
fn invalid_star_line_sharing_close() {
    check_invalid(
        "/*\n* Only one line in this block */",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 1),
            end: (2, 33),
            output: Some("// Only one line in this block"),
        },
    );
}

#[test]
fn invalid_inline_comment_is_unfixable() {
    check_invalid(
        "console.log(1);/* Cannot auto fix inline one line comment */;console.log(2);",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 16),
            end: (1, 61),
            output: None,
        },
    );
}

#[test]
fn invalid_in_braces_when_idiom_disallowed() {
    check_invalid(
        "{/* Cannot auto fix inline one line empty braces comment */ }",
        Some(json!({ "allowInEmptyBraces": false })),
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 2),
            end: (1, 60),
            output: None,
        },
    );
}

#[test]
fn invalid_crlf_line_end_is_fixable() {
    check_invalid(
        "{/* Can auto fix inline one line comment */\r\n}",
        None,
        &Expected {
            message_id: "useSingleLineNotation",
            start: (1, 2),
            end: (1, 44),
            output: Some("{// Can auto fix inline one line comment\r\n}"),
        },
    );
}

#[test]
fn invalid_multi_line_in_braces_indents_to_column() {
    check_invalid(
        "{/* Can auto fix\n inline multi line comment */}",
        Some(json!({ "allowInEmptyBraces": false })),
        &Expected {
            message_id: "useMultiLineBlock",
            start: (1, 2),
            end: (2, 30),
            output: Some("{/*\n  * Can auto fix\n  * inline multi line comment\n  */}"),
        },
    );
}

#[test]
fn valid_comments_with_default_options() {
    for source in [
        "/*\n* Two lines\n* in this block\n*/",
        "/**\n* One line JSDoc block\n*/",
        "/* eslint-disable no-warning-comments */",
        "/* eslint-enable no-warning-comments */",
        "/* eslint-disable-next-line no-warning-comments */",
        "/* eslint-enable-next-line no-warning-comments */",
        "/* global var1, var2 */",
        "/* eslint-env node */",
        "/* c8 ignore next */",
        "/* c8 ignore next 4 */",
        "/* istanbul ignore next */",
        "/* istanbul ignore if */",
        "/* istanbul ignore else */",
        "// Only one line in comment notation",
        "{ /* Only one line comment in braces */}",
    ] {
        check_valid(source, None);
    }
}

#[test]
fn valid_exempt_jsdoc_comments() {
    // Exemption wins for JSDoc-style comments too, even below the
    // three-line threshold that would otherwise force an expansion.
    for source in [
        "/** eslint-disable no-warning-comments */",
        "/** eslint-env node */",
        "/** c8 ignore next */",
        "/** istanbul ignore if */",
        "/** eslint-disable foo\n bar */",
    ] {
        check_valid(source, None);
    }
}

#[test]
fn valid_jsdoc_with_ignore_keyword() {
    check_valid(
        "/** cspell:ignore this */",
        Some(json!({ "ignore": ["cspell"] })),
    );
}

#[test]
fn valid_jsdoc_with_ignore_pattern() {
    check_valid(
        "/** custom RegExp */",
        Some(json!({ "ignorePatterns": ["(?:RegExp)(?: |)$"] })),
    );
}

#[test]
fn valid_with_allow_js_doc() {
    check_valid("/** allow js doc */", Some(json!({ "allowJSDoc": true })));
}

#[test]
fn valid_with_ignore_keyword() {
    check_valid(
        "/* cspell:ignore this */",
        Some(json!({ "allowJSDoc": true, "ignore": ["cspell"] })),
    );
}

#[test]
fn valid_with_ignore_pattern() {
    check_valid(
        "/* custom RegExp */",
        Some(json!({ "ignorePatterns": ["(?:RegExp)(?: |)$"] })),
    );
}

#[test]
fn fixable_filters_out_unfixable_diagnostics() {
    let source = "/* a */\ncode();/* inline */;more();\n";
    let result = lint_source(source, &[rule(None)]);
    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.fixable().count(), 1);
    // Applying the batch only touches the fixable token.
    let fixed = apply_fixes(source, &result.diagnostics);
    assert_eq!(fixed, "// a\ncode();/* inline */;more();\n");
}

#[test]
fn fixes_apply_in_one_batch() {
    let source = "/* a */\nok();\n/* b */\n";
    let result = lint_source(source, &[rule(None)]);
    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.fixable().count(), 2);
    let fixed = apply_fixes(source, &result.diagnostics);
    assert_eq!(fixed, "// a\nok();\n// b\n");
    assert!(lint_source(&fixed, &[rule(None)]).diagnostics.is_empty());
}
