//! A rectangular occupancy grid.
//!
//! [`Grid`] stores [`Cell`]s row-major in a single buffer. It is immutable
//! once built: the only way to change a maze is to build a new grid.

use std::fmt;

use crate::cell::Cell;
use crate::error::LoadError;
use crate::geom::Coord;

/// A rectangular, row-major grid of [`Cell`] values.
///
/// Every row has the same width. A grid with zero rows is valid (and empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a `width` x `height` grid filled with `cell`.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            cells: vec![cell; width * height],
            width,
            height,
        }
    }

    /// Build a grid from rows, rejecting jagged input.
    ///
    /// The first row fixes the width; any later row of a different length
    /// fails with [`LoadError::RaggedRow`].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, LoadError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (line, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(LoadError::RaggedRow {
                    line,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.height && (c.col as usize) < self.width
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        c.row as usize * self.width + c.col as usize
    }

    /// Get the cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        if !self.contains(c) {
            return None;
        }
        Some(self.cells[self.index(c)])
    }

    /// Whether `c` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_open)
    }

    /// The cells of row `row`, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.height).filter_map(move |r| self.row(r))
    }
}

impl fmt::Display for Grid {
    /// Renders the grid back to map text, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            seq.serialize_element(&line)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = Vec::<String>::deserialize(deserializer)?;
        crate::loader::parse_lines(lines.iter().map(String::as_str))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &[&str]) -> Vec<Vec<Cell>> {
        text.iter()
            .map(|l| l.chars().filter_map(Cell::from_char).collect())
            .collect()
    }

    #[test]
    fn from_rows_and_size() {
        let g = Grid::from_rows(rows(&["010", "001"])).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert!(!g.is_empty());
        assert_eq!(g.to_string(), "010\n001\n");
    }

    #[test]
    fn jagged_rows_rejected() {
        let err = Grid::from_rows(rows(&["010", "0011"])).unwrap_err();
        assert_eq!(
            err,
            LoadError::RaggedRow {
                line: 1,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn empty_grid_is_valid() {
        let g = Grid::from_rows(Vec::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.width(), 0);
        assert_eq!(g.at(Coord::new(0, 0)), None);
        assert_eq!(g.rows().count(), 0);
    }

    #[test]
    fn bounds_checked_access() {
        let g = Grid::from_rows(rows(&["01", "10"])).unwrap();
        assert_eq!(g.at(Coord::new(0, 0)), Some(Cell::Open));
        assert_eq!(g.at(Coord::new(1, 0)), Some(Cell::Wall));
        assert_eq!(g.at(Coord::new(-1, 0)), None);
        assert_eq!(g.at(Coord::new(0, 2)), None);
        assert!(g.is_open(Coord::new(1, 1)));
        assert!(!g.is_open(Coord::new(2, 1)));
    }

    #[test]
    fn row_access() {
        let g = Grid::from_rows(rows(&["01", "10", "00"])).unwrap();
        assert_eq!(g.row(2), Some(&[Cell::Open, Cell::Open][..]));
        assert_eq!(g.row(3), None);
        assert_eq!(g.rows().count(), 3);
    }

    #[test]
    fn display_renders_map_text() {
        let g = Grid::from_rows(rows(&["011", "000"])).unwrap();
        assert_eq!(g.to_string(), "011\n000\n");
        assert_eq!(Grid::filled(2, 1, Cell::Wall).to_string(), "11\n");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let g = Grid::from_rows(rows(&["011", "000"])).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"["011","000"]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert!(serde_json::from_str::<Grid>(r#"["01","0"]"#).is_err());
    }
}
