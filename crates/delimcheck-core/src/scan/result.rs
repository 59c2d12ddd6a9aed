//! Scan outcome types and their console rendering.

use std::fmt;

/// A source location (line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-indexed line number.
    pub line: usize,
    /// 1-indexed column number.
    pub column: usize,
}

/// The outcome of a delimiter scan.
///
/// The three problem variants are ordinary result values describing a
/// structural property of the input, not failures of the scanner itself.
/// A scan stops at the first unmatched or mismatched closer it sees;
/// unclosed openers are only detected at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResult {
    /// All delimiters matched correctly.
    Balanced,
    /// A closing symbol appeared with no open delimiter on the stack.
    UnmatchedCloser {
        /// The closing symbol that was seen.
        symbol: char,
        /// Where it was seen.
        location: SourceLocation,
    },
    /// A closing symbol did not match the most recently opened delimiter.
    MismatchedCloser {
        /// The closing symbol that was seen.
        symbol: char,
        /// Where it was seen.
        location: SourceLocation,
        /// The closing symbol that was required.
        expected: char,
        /// Where the mismatched delimiter was opened.
        opened: SourceLocation,
    },
    /// End of input was reached with delimiters still open.
    UnclosedOpeners {
        /// The innermost (most recently opened) unclosed symbol.
        symbol: char,
        /// Where the innermost unclosed delimiter was opened.
        location: SourceLocation,
        /// Total number of unclosed delimiters.
        count: usize,
    },
}

impl ScanResult {
    /// Check whether the scan found no problems.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => write!(f, "All delimiters are balanced."),
            Self::UnmatchedCloser { symbol, location } => write!(
                f,
                "Error: Unmatched '{symbol}' at line {}, column {}",
                location.line, location.column
            ),
            Self::MismatchedCloser {
                symbol,
                location,
                expected,
                opened,
            } => write!(
                f,
                "Error: Mismatched delimiter '{symbol}' at line {}, column {}. \
                 Expected '{expected}' (opened at {}:{})",
                location.line, location.column, opened.line, opened.column
            ),
            Self::UnclosedOpeners {
                symbol,
                location,
                count,
            } => write!(
                f,
                "Error: Unclosed '{symbol}' at line {}, column {}\n\
                 Total unclosed delimiters: {count}",
                location.line, location.column
            ),
        }
    }
}
