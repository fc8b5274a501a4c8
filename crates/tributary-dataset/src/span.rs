//! Byte ranges into loaded source documents.

use std::ops::Range;

/// A byte range in a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Locate a 1-based line/column position, as reported by `serde_json`,
    /// and return a span covering the character there.
    ///
    /// Positions past the end of `source` clamp to an empty span at the end.
    pub fn at_line_column(source: &str, line: usize, column: usize) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let end = source[offset..]
            .chars()
            .next()
            .filter(|ch| *ch != '\n')
            .map_or(offset, |ch| offset + ch.len_utf8());

        Self::new(offset..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let span = Span::new(3..8);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_at_line_column_first_line() {
        let span = Span::at_line_column("{ x }", 1, 3);
        assert_eq!(span, Span::new(2..3));
    }

    #[test]
    fn test_at_line_column_later_line() {
        let source = "{\n  \"a\": 1,\n  oops\n}";
        let span = Span::at_line_column(source, 3, 3);
        assert_eq!(&source[span.start()..span.end()], "o");
    }

    #[test]
    fn test_at_line_column_clamps_past_end() {
        let source = "{\"a\": ";
        let span = Span::at_line_column(source, 1, 40);
        assert_eq!(span.start(), source.len());
        assert!(span.is_empty());
    }
}
