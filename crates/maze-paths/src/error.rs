//! Failure reasons for maze traversals.

use std::fmt;

use maze_core::Coord;

/// Why a traversal produced no path.
///
/// The plain operations on [`Navigator`](crate::Navigator) collapse every
/// variant into an empty path; the `try_` variants return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// The model failed to load.
    Uninitialized,
    /// The model loaded but has no rows.
    EmptyGrid,
    RowOutOfBounds(usize),
    ColumnOutOfBounds(usize),
    /// The requested row has zero cells.
    EmptyRow(usize),
    /// The scanned line (or the whole grid) has no open cell.
    NoOpenCell,
    /// No row contains an open cell to enter a room through.
    NoEntrance,
    /// The entrance opens both downward and rightward.
    AmbiguousRoom(Coord),
    /// The entrance opens neither downward nor rightward.
    NoRoom(Coord),
    /// The walk into the room covered fewer than two cells.
    RoomTooNarrow(Coord),
    /// The cell reached across the room is not a valid exit.
    InvalidExit(Coord),
    /// A cell with more than two open neighbours: the corridor forks.
    Fork { at: Coord, open_neighbors: usize },
    InvalidStart(Coord),
    InvalidEnd(Coord),
    /// The last row has no open cell to finish a maze solve on.
    NoExit,
    /// The search space was exhausted before reaching the goal.
    Unreachable,
}

impl PathError {
    /// Whether this failure was caused by bad input or a malformed maze, as
    /// opposed to a well-formed query that simply has no answer.
    pub fn is_invalid_input(self) -> bool {
        !matches!(self, Self::NoOpenCell | Self::Unreachable)
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "grid map is not initialized"),
            Self::EmptyGrid => write!(f, "grid map is empty"),
            Self::RowOutOfBounds(r) => write!(f, "row index {r} is out of bounds"),
            Self::ColumnOutOfBounds(c) => write!(f, "column index {c} is out of bounds"),
            Self::EmptyRow(r) => write!(f, "row {r} of the map is empty"),
            Self::NoOpenCell => write!(f, "no open cell found"),
            Self::NoEntrance => write!(f, "no entrance found"),
            Self::AmbiguousRoom(c) => {
                write!(f, "invalid room: entrance {c} opens both down and right")
            }
            Self::NoRoom(c) => write!(f, "no room found behind entrance {c}"),
            Self::RoomTooNarrow(c) => {
                write!(f, "invalid room behind {c}: must be at least 2 cells wide")
            }
            Self::InvalidExit(c) => write!(f, "invalid room: no valid exit at {c}"),
            Self::Fork { at, open_neighbors } => {
                write!(f, "invalid map: {at} has {open_neighbors} open neighbours")
            }
            Self::InvalidStart(c) => write!(f, "invalid start {c}"),
            Self::InvalidEnd(c) => write!(f, "invalid end {c}"),
            Self::NoExit => write!(f, "no exit found in the last row"),
            Self::Unreachable => write!(f, "goal is unreachable"),
        }
    }
}

impl std::error::Error for PathError {}
