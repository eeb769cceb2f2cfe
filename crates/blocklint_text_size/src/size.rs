use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A byte offset (or byte length) in source text.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextSize {
    raw: u32,
}

impl TextSize {
    pub const fn new(raw: u32) -> Self {
        Self { raw }
    }

    /// The UTF-8 length of `text`.
    ///
    /// Panics if the text is longer than `u32::MAX` bytes.
    #[allow(clippy::cast_possible_truncation)]
    pub fn of(text: &str) -> Self {
        assert!(u32::try_from(text.len()).is_ok(), "text too long");
        Self::new(text.len() as u32)
    }

    pub const fn to_u32(self) -> u32 {
        self.raw
    }

    pub const fn to_usize(self) -> usize {
        self.raw as usize
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.raw.checked_add(rhs.raw).map(Self::new)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.raw.checked_sub(rhs.raw).map(Self::new)
    }
}

impl fmt::Debug for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<u32> for TextSize {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl From<TextSize> for u32 {
    fn from(size: TextSize) -> Self {
        size.raw
    }
}

impl From<TextSize> for usize {
    fn from(size: TextSize) -> Self {
        size.raw as usize
    }
}

impl TryFrom<usize> for TextSize {
    type Error = std::num::TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u32::try_from(value).map(Self::new)
    }
}

impl Add for TextSize {
    type Output = TextSize;

    fn add(self, rhs: TextSize) -> TextSize {
        TextSize::new(self.raw + rhs.raw)
    }
}

impl Sub for TextSize {
    type Output = TextSize;

    fn sub(self, rhs: TextSize) -> TextSize {
        TextSize::new(self.raw - rhs.raw)
    }
}

impl AddAssign for TextSize {
    fn add_assign(&mut self, rhs: TextSize) {
        self.raw += rhs.raw;
    }
}

impl SubAssign for TextSize {
    fn sub_assign(&mut self, rhs: TextSize) {
        self.raw -= rhs.raw;
    }
}

impl Sum for TextSize {
    fn sum<I: Iterator<Item = TextSize>>(iter: I) -> TextSize {
        iter.fold(TextSize::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_str() {
        assert_eq!(TextSize::of(""), TextSize::new(0));
        assert_eq!(TextSize::of("abc"), TextSize::new(3));
        // Multi-byte characters count bytes, not chars.
        assert_eq!(TextSize::of("é"), TextSize::new(2));
    }

    #[test]
    fn test_arithmetic() {
        let a = TextSize::new(5);
        let b = TextSize::new(3);
        assert_eq!(a + b, TextSize::new(8));
        assert_eq!(a - b, TextSize::new(2));
        assert_eq!(b.checked_sub(a), None);
    }

    #[test]
    fn test_conversions() {
        let size = TextSize::new(42);
        assert_eq!(usize::from(size), 42usize);
        assert_eq!(u32::from(size), 42u32);
        assert_eq!(TextSize::try_from(42usize).unwrap(), size);
    }
}
