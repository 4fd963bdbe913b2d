//! Following a non-branching corridor with a depth-first search.

use std::collections::HashSet;

use maze_core::{Coord, Grid, Path};

use crate::Navigator;
use crate::error::PathError;
use crate::scan::{first_open_in_column, first_open_in_row};
use crate::traits::Pather;

/// More open neighbours than this means the corridor forks.
const MAX_CORRIDOR_NEIGHBORS: usize = 2;

/// Iterative DFS from `seed` that fails as soon as it pops a cell with more
/// than two open neighbours.
///
/// Cells are appended to the path in pop order. Neighbours are marked
/// visited when pushed, so no cell is ever on the stack twice.
pub(crate) fn constrained_dfs<P: Pather>(pather: &P, seed: Coord) -> Result<Path, PathError> {
    let mut stack = vec![seed];
    let mut visited: HashSet<Coord> = HashSet::from([seed]);
    let mut path = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = stack.pop() {
        path.push(current);

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        if nbuf.len() > MAX_CORRIDOR_NEIGHBORS {
            return Err(PathError::Fork {
                at: current,
                open_neighbors: nbuf.len(),
            });
        }

        for &n in nbuf.iter() {
            if visited.insert(n) {
                stack.push(n);
            }
        }
    }

    Ok(path)
}

/// Alternately probe row `i` and column `i` for an open cell, rows first.
fn winding_seed(grid: &Grid) -> Option<Coord> {
    let (height, width) = (grid.height(), grid.width());
    let (mut row, mut col) = (0, 0);
    while row < height || col < width {
        if row < height {
            if let Some(c) = first_open_in_row(grid, row) {
                return Some(Coord::new(row as i32, c as i32));
            }
            row += 1;
        }
        if col < width {
            if let Some(r) = first_open_in_column(grid, col) {
                return Some(Coord::new(r as i32, col as i32));
            }
            col += 1;
        }
    }
    None
}

impl Navigator<'_> {
    /// Follow the winding corridor from an explicit open `seed`.
    pub fn try_winding_path_from(&self, seed: Coord) -> Result<Path, PathError> {
        let grid = self.guard()?;
        if !grid.is_open(seed) {
            return Err(PathError::InvalidStart(seed));
        }
        constrained_dfs(grid, seed)
    }

    /// Find the first open cell and follow the corridor it belongs to.
    ///
    /// Fails with [`PathError::Fork`] if any reachable cell has more than two
    /// open neighbours; no partial path is returned in that case.
    pub fn try_winding_path(&self) -> Result<Path, PathError> {
        let grid = self.guard()?;
        let seed = winding_seed(grid).ok_or(PathError::NoOpenCell)?;
        log::debug!("winding path seed at {seed}");
        constrained_dfs(grid, seed)
    }

    /// [`try_winding_path`](Self::try_winding_path), empty on failure.
    pub fn winding_path(&self) -> Path {
        self.settle("winding path", self.try_winding_path())
    }

    /// [`try_winding_path_from`](Self::try_winding_path_from), empty on failure.
    pub fn winding_path_from(&self, seed: Coord) -> Path {
        self.settle("winding path", self.try_winding_path_from(seed))
    }
}
