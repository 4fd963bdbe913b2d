//! The [`Cell`] type: one occupancy value of a maze grid.

use std::fmt;

/// Binary occupancy of a single grid cell.
///
/// In map text an open cell is written `'0'` and a wall `'1'`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

impl Cell {
    /// Parse a map character. Anything other than `'0'` / `'1'` is `None`.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::Open),
            '1' => Some(Self::Wall),
            _ => None,
        }
    }

    /// The map character for this cell.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Open => '0',
            Self::Wall => '1',
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
