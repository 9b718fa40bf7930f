//! Source line tracking for error messages.

use std::fmt;

/// A range of source lines (1-indexed, inclusive on both ends).
///
/// Properties continued over several lines cover every line that contributed
/// to their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSpan {
    /// First line of the property
    pub start: u32,
    /// Last line that contributed to the value
    pub end: u32,
}

impl LineSpan {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// A span covering a single line.
    pub fn line(line: u32) -> Self {
        Self::new(line, line)
    }

    /// Extend the span so it reaches `line`.
    pub fn extend_to(&mut self, line: u32) {
        if line > self.end {
            self.end = line;
        }
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
