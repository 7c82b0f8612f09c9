//! Buffer positions and tagged spans
//!
//! Positions use the text-widget convention: lines are 1-based and
//! columns are 0-based, counted in characters (not bytes).

use std::fmt;

use super::tokens::TokenKind;

/// A (line, column) address into a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1
    pub line: usize,
    /// Character column, starting at 0
    pub column: usize,
}

impl Position {
    /// First position of every buffer
    pub const START: Position = Position { line: 1, column: 0 };

    /// Create a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Start of the given line
    pub const fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }

    /// The position reached after walking over `text` from here
    ///
    /// Each character moves one column; a newline moves to column 0
    /// of the following line.
    pub fn advanced_by(self, text: &str) -> Position {
        let mut pos = self;
        match text.rfind('\n') {
            None => pos.column += text.chars().count(),
            Some(last) => {
                pos.line += text.matches('\n').count();
                pos.column = text[last + 1..].chars().count();
            }
        }
        pos
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.line, self.column)
    }
}

/// A buffer range tagged with one token kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Where this span starts (inclusive)
    pub start: Position,
    /// Where this span ends (exclusive)
    pub end: Position,
    /// Classification applied to the range
    pub kind: TokenKind,
}

impl Span {
    /// Create a new span
    pub fn new(start: Position, end: Position, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    /// Check if this span contains a position
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_within_line() {
        let pos = Position::new(3, 4).advanced_by("abc");
        assert_eq!(pos, Position::new(3, 7));
    }

    #[test]
    fn test_advance_counts_chars_not_bytes() {
        let pos = Position::START.advanced_by("héllo→");
        assert_eq!(pos, Position::new(1, 6));
    }

    #[test]
    fn test_advance_across_newlines() {
        let pos = Position::new(2, 5).advanced_by("x\n\nyz");
        assert_eq!(pos, Position::new(4, 2));
        assert_eq!(Position::new(1, 3).advanced_by("\n"), Position::new(2, 0));
    }

    #[test]
    fn test_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(2, 1) > Position::new(2, 0));
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(Position::new(1, 5), Position::new(1, 10), TokenKind::TEXT);
        assert!(!span.contains(Position::new(1, 4)));
        assert!(span.contains(Position::new(1, 5)));
        assert!(span.contains(Position::new(1, 9)));
        assert!(!span.contains(Position::new(1, 10)));
        assert!(!span.is_empty());
    }
}
