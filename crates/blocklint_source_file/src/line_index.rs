use blocklint_text_size::TextSize;

/// Precomputed table of line start offsets for one source text.
///
/// Lines are separated by `\n`; a `\r\n` pair counts as a single separator
/// with the `\r` belonging to the preceding line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn from_source_text(source: &str) -> Self {
        let mut line_starts = Vec::with_capacity(source.len() / 32 + 1);
        line_starts.push(TextSize::new(0));
        for pos in memchr::memchr_iter(b'\n', source.as_bytes()) {
            line_starts.push(TextSize::try_from(pos + 1).expect("source too long"));
        }
        Self { line_starts }
    }

    /// Number of lines, counting a trailing newline as starting a new line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based line containing `offset`.
    pub fn line_of(&self, offset: TextSize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    /// Start offset of the zero-based `line`.
    ///
    /// Panics if `line >= line_count()`.
    pub fn line_start(&self, line: usize) -> TextSize {
        self.line_starts[line]
    }
}
