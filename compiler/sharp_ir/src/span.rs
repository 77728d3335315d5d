//! Byte ranges into the parsed source.

use std::fmt;

/// Half-open byte range `start..end`. Zero-width spans mark missing tokens
/// and insertion points.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Span from the start of `self` to the end of `other`.
    ///
    /// A missing token (zero width, placed before `self` ends) on the right
    /// leaves `self` unchanged.
    #[inline]
    #[must_use]
    pub fn to(self, other: Span) -> Span {
        if other.is_empty() && other.start < self.end {
            return self;
        }
        Span {
            start: self.start,
            end: other.end.max(self.start),
        }
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The covered slice of `source`, empty when out of bounds.
    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const _: () = assert!(size_of::<Span>() == 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_empty() {
        let span = Span::point(7);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(Span::new(3, 9).len(), 6);
    }

    #[test]
    fn test_merge_covers_both() {
        assert_eq!(Span::new(10, 20).merge(Span::new(15, 30)), Span::new(10, 30));
        assert_eq!(Span::new(4, 5).merge(Span::new(0, 1)), Span::new(0, 5));
    }

    #[test]
    fn test_to_ignores_trailing_missing() {
        let open = Span::new(4, 9);
        assert_eq!(open.to(Span::point(2)), open);
        assert_eq!(open.to(Span::new(12, 14)), Span::new(4, 14));
        // A missing token after `self` still extends it.
        assert_eq!(open.to(Span::point(11)), Span::new(4, 11));
    }

    #[test]
    fn test_text() {
        let source = "x is int";
        assert_eq!(Span::new(5, 8).text(source), "int");
        assert_eq!(Span::point(2).text(source), "");
        assert_eq!(Span::new(5, 40).text(source), "");
    }
}
