use std::fmt;

/// A zero-indexed location in the source text.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Inclusive source extent of a token or syntax node. Only used for diagnostics.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Range {
    pub begin: Position,
    pub end: Position,
}

impl Range {
    pub fn new(begin: Position, end: Position) -> Self {
        Self { begin, end }
    }

    pub fn from_coords(begin: (usize, usize), end: (usize, usize)) -> Self {
        Self {
            begin: Position::new(begin.0, begin.1),
            end: Position::new(end.0, end.1),
        }
    }

    /// Range from the beginning of `first` to the end of `last`.
    pub fn span(first: Range, last: Range) -> Self {
        Self {
            begin: first.begin,
            end: last.end,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}
