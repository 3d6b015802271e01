//! Byte offset to line number mapping.
//!
//! Used only to decorate diagnostics; the scanner never consults it for
//! parse decisions.

/// Precomputed line boundaries of a buffer.
///
/// Line `n` (1-based) covers `length` bytes starting at `start`, including
/// its terminating `\n`. A final line without a newline is indexed too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    lines: Vec<(usize, usize)>,
}

impl LineIndex {
    /// Indexes the lines of `buffer`.
    pub fn new(buffer: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        for (offset, byte) in buffer.bytes().enumerate() {
            if byte == b'\n' {
                lines.push((start, offset + 1 - start));
                start = offset + 1;
            }
        }
        if start < buffer.len() {
            lines.push((start, buffer.len() - start));
        }
        Self { lines }
    }

    /// Returns the number of indexed lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` for an empty buffer.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns `(start_offset, length)` of the 1-based line `number`.
    pub fn line(&self, number: usize) -> Option<(usize, usize)> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .copied()
    }

    /// Returns the 1-based line containing `offset`, or `None` past the end.
    pub fn line_of(&self, offset: usize) -> Option<usize> {
        let index = self.lines.partition_point(|&(start, _)| start <= offset);
        let (start, length) = *self.lines.get(index.checked_sub(1)?)?;
        (offset < start + length).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: &str = "[lightgray: Frame\n    [] [White: Message text]\n    //\n    \
        [goldenrod: OK Button] [] [#ff0505: Cancel Button]\n    /\n    []\n]\n";

    #[test]
    fn test_line_boundaries() {
        let index = LineIndex::new(FRAME);

        let expected = [
            (0, 18),
            (18, 29),
            (47, 7),
            (54, 55),
            (109, 6),
            (115, 7),
            (122, 2),
        ];
        assert_eq!(index.len(), expected.len());
        for (number, boundary) in expected.iter().enumerate() {
            assert_eq!(index.line(number + 1), Some(*boundary));
        }
    }

    #[test]
    fn test_line_of() {
        let index = LineIndex::new(FRAME);

        assert_eq!(index.line_of(47), Some(3));
        assert_eq!(index.line_of(10), Some(1));
        assert_eq!(index.line_of(17), Some(1));
        assert_eq!(index.line_of(18), Some(2));
        assert_eq!(index.line_of(123), Some(7));
        assert_eq!(index.line_of(124), None);
    }

    #[test]
    fn test_unterminated_last_line() {
        let index = LineIndex::new("[a]\n[b");

        assert_eq!(index.len(), 2);
        assert_eq!(index.line(2), Some((4, 2)));
        assert_eq!(index.line_of(5), Some(2));
    }

    #[test]
    fn test_empty_buffer() {
        let index = LineIndex::new("");

        assert!(index.is_empty());
        assert_eq!(index.line_of(0), None);
        assert_eq!(index.line(0), None);
    }
}
