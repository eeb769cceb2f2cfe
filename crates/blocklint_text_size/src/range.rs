use std::fmt;
use std::ops::{Index, Range};

use crate::TextSize;

/// A half-open byte range `[start, end)` in source text.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: TextSize,
    end: TextSize,
}

impl TextRange {
    /// Panics if `end < start`.
    pub fn new(start: TextSize, end: TextSize) -> Self {
        assert!(start <= end, "invalid range: {start:?}..{end:?}");
        Self { start, end }
    }

    pub fn at(offset: TextSize, len: TextSize) -> Self {
        Self::new(offset, offset + len)
    }

    pub fn empty(offset: TextSize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// The range covering all of `text`.
    pub fn up_to(text: &str) -> Self {
        Self::new(TextSize::new(0), TextSize::of(text))
    }

    pub const fn start(self) -> TextSize {
        self.start
    }

    pub const fn end(self) -> TextSize {
        self.end
    }

    pub fn len(self) -> TextSize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn contains(self, offset: TextSize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn contains_range(self, other: TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn intersects(self, other: TextRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl From<TextRange> for Range<usize> {
    fn from(range: TextRange) -> Self {
        range.start.into()..range.end.into()
    }
}

impl Index<TextRange> for str {
    type Output = str;

    fn index(&self, range: TextRange) -> &str {
        &self[Range::<usize>::from(range)]
    }
}

impl Index<TextRange> for String {
    type Output = str;

    fn index(&self, range: TextRange) -> &str {
        &self.as_str()[range]
    }
}
