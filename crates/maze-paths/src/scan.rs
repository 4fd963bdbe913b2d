//! Linear scans for the first open cell of a row or column.

use maze_core::{Cell, Coord, Grid, Path};

use crate::Navigator;
use crate::error::PathError;

/// First open column of `row`, assuming `row` is in bounds.
pub(crate) fn first_open_in_row(grid: &Grid, row: usize) -> Option<usize> {
    grid.row(row)?.iter().position(|c| c.is_open())
}

/// First open row of `col`, assuming `col` is in bounds.
pub(crate) fn first_open_in_column(grid: &Grid, col: usize) -> Option<usize> {
    grid.rows()
        .position(|r| r.get(col).copied().is_some_and(Cell::is_open))
}

impl Navigator<'_> {
    /// Column index of the first open cell in `row`, scanning left to right.
    pub fn try_scan_row(&self, row: usize) -> Result<usize, PathError> {
        let grid = self.guard()?;
        if row >= grid.height() {
            return Err(PathError::RowOutOfBounds(row));
        }
        if grid.width() == 0 {
            return Err(PathError::EmptyRow(row));
        }
        first_open_in_row(grid, row).ok_or(PathError::NoOpenCell)
    }

    /// Row index of the first open cell in `col`, scanning top to bottom.
    ///
    /// Bounds are checked against the width of row 0.
    pub fn try_scan_column(&self, col: usize) -> Result<usize, PathError> {
        let grid = self.guard()?;
        if col >= grid.width() {
            return Err(PathError::ColumnOutOfBounds(col));
        }
        first_open_in_column(grid, col).ok_or(PathError::NoOpenCell)
    }

    /// Like [`try_scan_row`](Self::try_scan_row), with failures logged and
    /// reported as `None`.
    pub fn scan_row(&self, row: usize) -> Option<usize> {
        self.try_scan_row(row)
            .map_err(|e| self.report("scan row", e))
            .ok()
    }

    /// Like [`try_scan_column`](Self::try_scan_column), with failures logged
    /// and reported as `None`.
    pub fn scan_column(&self, col: usize) -> Option<usize> {
        self.try_scan_column(col)
            .map_err(|e| self.report("scan column", e))
            .ok()
    }

    /// The first open cell of `row` as a one-element path.
    pub fn try_first_open_in_row(&self, row: usize) -> Result<Path, PathError> {
        self.try_scan_row(row)
            .map(|col| vec![Coord::new(row as i32, col as i32)])
    }

    /// [`try_first_open_in_row`](Self::try_first_open_in_row), empty on failure.
    pub fn first_open_in_row(&self, row: usize) -> Path {
        self.settle("first open in row", self.try_first_open_in_row(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::GridModel;

    const MULTIPLE_ROWS: &str = "\
0111111111
0000000001
0111011101
1110010101
1011010101
1001110101
1101000101
1101011101
1100010001
1011111111";

    #[test]
    fn scan_single_row() {
        let m = GridModel::from_text("101111");
        let nav = Navigator::new(&m);
        assert_eq!(nav.scan_row(0), Some(1));

        let m = GridModel::from_text("110100");
        assert_eq!(Navigator::new(&m).scan_row(0), Some(2));
    }

    #[test]
    fn scan_row_out_of_bounds() {
        let m = GridModel::from_text("101111");
        let nav = Navigator::new(&m);
        assert_eq!(nav.scan_row(1), None);
        assert_eq!(nav.try_scan_row(1), Err(PathError::RowOutOfBounds(1)));
    }

    #[test]
    fn scan_multiple_rows() {
        let m = GridModel::from_text(MULTIPLE_ROWS);
        let nav = Navigator::new(&m);
        assert_eq!(nav.scan_row(0), Some(0));
        assert_eq!(nav.scan_row(1), Some(0));
        assert_eq!(nav.scan_row(2), Some(0));
        assert_eq!(nav.scan_row(3), Some(3));
        assert_eq!(nav.scan_row(9), Some(1));
    }

    #[test]
    fn scan_columns() {
        let m = GridModel::from_text(MULTIPLE_ROWS);
        let nav = Navigator::new(&m);
        assert_eq!(nav.scan_column(0), Some(0));
        assert_eq!(nav.scan_column(1), Some(1));
        assert_eq!(nav.scan_column(9), None);
        assert_eq!(nav.try_scan_column(9), Err(PathError::NoOpenCell));
        assert_eq!(
            nav.try_scan_column(10),
            Err(PathError::ColumnOutOfBounds(10))
        );
    }

    #[test]
    fn scan_all_walls() {
        let m = GridModel::from_text("111\n111");
        let nav = Navigator::new(&m);
        assert_eq!(nav.try_scan_row(0), Err(PathError::NoOpenCell));
        assert_eq!(nav.scan_column(2), None);
        assert!(nav.first_open_in_row(0).is_empty());
    }

    #[test]
    fn scan_uninitialized_and_empty() {
        let failed = GridModel::from_text("01\n011");
        let nav = Navigator::new(&failed);
        assert_eq!(nav.try_scan_row(0), Err(PathError::Uninitialized));
        assert_eq!(nav.try_scan_column(0), Err(PathError::Uninitialized));

        let empty = GridModel::from_text("");
        let nav = Navigator::new(&empty);
        assert_eq!(nav.try_scan_row(0), Err(PathError::EmptyGrid));
        assert_eq!(nav.scan_column(0), None);
    }

    #[test]
    fn scan_zero_width_rows() {
        let m = GridModel::from_result(Grid::from_rows(vec![Vec::new(), Vec::new()]));
        let nav = Navigator::new(&m);
        assert_eq!(nav.try_scan_row(1), Err(PathError::EmptyRow(1)));
        assert_eq!(nav.try_scan_column(0), Err(PathError::ColumnOutOfBounds(0)));
    }

    #[test]
    fn first_open_as_path() {
        let m = GridModel::from_text("111\n101");
        let nav = Navigator::new(&m);
        assert_eq!(nav.first_open_in_row(1), vec![Coord::new(1, 1)]);
        assert_eq!(nav.try_first_open_in_row(0), Err(PathError::NoOpenCell));
    }

    // ── Properties ──────────────────────────────────────────────

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn scans_find_smallest_open_index(
            cells in prop::collection::vec(prop::collection::vec(prop::bool::ANY, 6), 1..8)
        ) {
            let rows: Vec<Vec<Cell>> = cells
                .iter()
                .map(|r| r.iter().map(|&w| if w { Cell::Wall } else { Cell::Open }).collect())
                .collect();
            let m = GridModel::from_result(Grid::from_rows(rows));
            let nav = Navigator::new(&m);
            for (r, row) in cells.iter().enumerate() {
                let expected = row.iter().position(|&w| !w);
                prop_assert_eq!(nav.scan_row(r), expected);
                // Idempotent on an unchanged grid.
                prop_assert_eq!(nav.scan_row(r), expected);
            }
            for c in 0..6 {
                let expected = cells.iter().position(|row| !row[c]);
                prop_assert_eq!(nav.scan_column(c), expected);
            }
        }
    }
}
