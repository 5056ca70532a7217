//! Selection state of a single file.

use serde::{Deserialize, Serialize};

use crate::Position;

/// What the user has selected in a file, if anything can be determined.
///
/// The three variants are mutually exclusive. On the wire they encode as:
///
/// ```json
/// {"start":{"line":3,"column":0},"end":{"line":5,"column":10}}
/// {"cursor":{"line":1,"column":0}}
/// null
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<SelectionRepr>", into = "Option<SelectionRepr>")]
pub enum Selection {
    /// A non-empty text selection. `start` never follows `end`.
    Range {
        /// First selected position in document order.
        start: Position,
        /// Position just past the selected text.
        end: Position,
    },
    /// A collapsed caret with nothing selected.
    Cursor {
        /// Caret location.
        position: Position,
    },
    /// No live view with a caret backs the file.
    #[default]
    None,
}

impl Selection {
    /// Builds a range, ordering the endpoints so `start <= end`.
    #[must_use]
    pub fn range(first: Position, second: Position) -> Self {
        let (start, end) = if second < first {
            (second, first)
        } else {
            (first, second)
        };
        Self::Range { start, end }
    }

    /// Builds a collapsed caret.
    #[must_use]
    pub const fn cursor(position: Position) -> Self {
        Self::Cursor { position }
    }

    /// Returns `true` when no selection information is available.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Range { start: Position, end: Position },
    Cursor { cursor: Position },
}

impl From<Option<SelectionRepr>> for Selection {
    fn from(repr: Option<SelectionRepr>) -> Self {
        match repr {
            Some(SelectionRepr::Range { start, end }) => Self::Range { start, end },
            Some(SelectionRepr::Cursor { cursor }) => Self::Cursor { position: cursor },
            None => Self::None,
        }
    }
}

impl From<Selection> for Option<SelectionRepr> {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Range { start, end } => Some(SelectionRepr::Range { start, end }),
            Selection::Cursor { position } => Some(SelectionRepr::Cursor { cursor: position }),
            Selection::None => None,
        }
    }
}
