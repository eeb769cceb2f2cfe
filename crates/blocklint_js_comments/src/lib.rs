//! Comment tokenization for JavaScript/TypeScript source text.
//!
//! [`scan_comments`] enumerates the comment tokens of a source unit the
//! way a host tokenizer would hand them to a rule: kind, inner text
//! (delimiters excluded) and the byte range of the full token. String
//! and template literals are skipped so comment-looking bytes inside
//! them are not tokenized.
//!
//! This is a lexical scan, not a parse: regular-expression literals are
//! not recognized, and comments inside template interpolations are not
//! reported. Hosts with a real tokenizer should feed their own tokens
//! instead.

use blocklint_text_size::{TextRange, TextSize};

/// The flavor of a comment token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// A `//` comment running to the end of its line.
    Line,
    /// A `/* */` comment, possibly spanning multiple lines.
    Block,
}

/// One comment occurrence in a source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub kind: CommentKind,
    /// The text between the delimiters, exclusive.
    pub text: String,
    /// The byte range of the full token, delimiters included.
    pub range: TextRange,
}

impl Comment {
    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }

    /// A block comment opened with `/**` is JSDoc-style.
    pub fn is_jsdoc(&self) -> bool {
        self.is_block() && self.text.starts_with('*')
    }
}

/// Scan `source` and return its comment tokens in source order.
pub fn scan_comments(source: &str) -> Vec<Comment> {
    let bytes = source.as_bytes();
    let mut comments = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'"' | b'\'' => {
                pos = skip_string(bytes, pos);
            }
            b'`' => {
                pos = skip_template(bytes, pos);
            }
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                let (comment, next) = scan_line_comment(source, pos);
                comments.push(comment);
                pos = next;
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                let (comment, next) = scan_block_comment(source, pos);
                comments.push(comment);
                pos = next;
            }
            _ => pos += 1,
        }
    }

    comments
}

/// Skip a single- or double-quoted string starting at `start`.
/// Unterminated strings end at the line break.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'\n' => return pos,
            b if b == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    pos
}

/// Skip a template literal starting at `start`. Template literals may
/// span lines; interpolation bodies are not descended into.
fn skip_template(bytes: &[u8], start: usize) -> usize {
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'`' => return pos + 1,
            _ => pos += 1,
        }
    }
    pos
}

fn scan_line_comment(source: &str, start: usize) -> (Comment, usize) {
    let bytes = source.as_bytes();
    let line_end = bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |i| start + i);
    // The token excludes the line terminator, including a CRLF's \r.
    let token_end = if line_end > start && bytes[line_end - 1] == b'\r' {
        line_end - 1
    } else {
        line_end
    };
    let comment = Comment {
        kind: CommentKind::Line,
        text: source[start + 2..token_end].to_string(),
        range: range_of(start, token_end),
    };
    (comment, line_end)
}

fn scan_block_comment(source: &str, start: usize) -> (Comment, usize) {
    let bytes = source.as_bytes();
    let mut pos = start + 2;
    while pos + 1 < bytes.len() {
        if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
            let comment = Comment {
                kind: CommentKind::Block,
                text: source[start + 2..pos].to_string(),
                range: range_of(start, pos + 2),
            };
            return (comment, pos + 2);
        }
        pos += 1;
    }
    // Unterminated block comment runs to the end of the text.
    let comment = Comment {
        kind: CommentKind::Block,
        text: source[start + 2..].to_string(),
        range: range_of(start, bytes.len()),
    };
    (comment, bytes.len())
}

fn range_of(start: usize, end: usize) -> TextRange {
    TextRange::new(
        TextSize::try_from(start).expect("source too long"),
        TextSize::try_from(end).expect("source too long"),
    )
}
