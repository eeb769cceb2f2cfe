use blocklint_text_size::{TextRange, TextSize};

use crate::LineIndex;

/// A one-based line/column position, counting columns in characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

/// A line/column span for a token or diagnostic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: LineColumn,
    pub end: LineColumn,
}

/// Source text paired with its line index, for position queries.
pub struct SourceCode<'src, 'idx> {
    text: &'src str,
    index: &'idx LineIndex,
}

impl<'src, 'idx> SourceCode<'src, 'idx> {
    pub fn new(text: &'src str, index: &'idx LineIndex) -> Self {
        Self { text, index }
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn line_column(&self, offset: TextSize) -> LineColumn {
        let line = self.index.line_of(offset);
        let line_start = self.index.line_start(line);
        let column = self.text[TextRange::new(line_start, offset)].chars().count();
        LineColumn {
            line: line as u32 + 1,
            column: column as u32 + 1,
        }
    }

    pub fn span(&self, range: TextRange) -> Span {
        Span {
            start: self.line_column(range.start()),
            end: self.line_column(range.end()),
        }
    }

    pub fn slice(&self, range: TextRange) -> &'src str {
        &self.text[range]
    }
}
