//! Caret and selection endpoints.

use serde::{Deserialize, Serialize};

/// A location inside a document.
///
/// Lines are 1-indexed and columns are 0-indexed, matching the conventions of
/// editor status bars and compiler diagnostics respectively.
///
/// ```json
/// {"line":3,"column":0}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column offset within the line (0-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a position from an already 1-indexed line.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Converts a host-internal 0-indexed row into a position.
    ///
    /// The row gains one; the column is passed through unchanged.
    #[must_use]
    pub const fn from_host(row: u32, column: u32) -> Self {
        Self {
            line: row.saturating_add(1),
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0, 1, 0)]
    #[case(2, 0, 3, 0)]
    #[case(4, 10, 5, 10)]
    #[case(u32::MAX, 7, u32::MAX, 7)]
    fn host_rows_shift_by_one(
        #[case] row: u32,
        #[case] column: u32,
        #[case] line: u32,
        #[case] expected_column: u32,
    ) {
        let position = Position::from_host(row, column);
        assert_eq!(position, Position::new(line, expected_column));
    }

    #[test]
    fn orders_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(3, 1) < Position::new(3, 2));
    }
}
