//! Straight hallway walks.

use maze_core::{Coord, Grid, Path};

use crate::Navigator;
use crate::error::PathError;
use crate::scan::first_open_in_row;

/// Push `from`, then every consecutive open cell in direction `step`, until
/// a wall or the grid edge.
///
/// `from` itself is pushed unconditionally; callers check it.
pub(crate) fn walk(grid: &Grid, from: Coord, step: Coord, path: &mut Path) {
    path.push(from);
    let mut next = from + step;
    while grid.is_open(next) {
        path.push(next);
        next = next + step;
    }
}

/// Direction a hallway runs from its seed, decided once.
fn hallway_step(grid: &Grid, seed: Coord) -> Option<Coord> {
    if grid.is_open(seed + Coord::DOWN) {
        Some(Coord::DOWN)
    } else if grid.is_open(seed + Coord::RIGHT) {
        Some(Coord::RIGHT)
    } else {
        None
    }
}

impl Navigator<'_> {
    /// Walk the straight hallway starting at `seed`.
    ///
    /// The hallway runs down the column if the cell below is open, otherwise
    /// right along the row if the cell to the right is open, otherwise it is
    /// the single seed cell. The direction is never re-evaluated mid-walk.
    pub fn try_walk_hallway_from(&self, seed: Coord) -> Result<Path, PathError> {
        let grid = self.guard()?;
        if !grid.is_open(seed) {
            return Err(PathError::InvalidStart(seed));
        }
        let mut path = Vec::new();
        match hallway_step(grid, seed) {
            Some(step) => walk(grid, seed, step, &mut path),
            None => path.push(seed),
        }
        Ok(path)
    }

    /// Find the first row with an open cell and walk the hallway it starts.
    pub fn try_walk_hallway(&self) -> Result<Path, PathError> {
        let grid = self.guard()?;
        let seed = (0..grid.height())
            .find_map(|row| {
                first_open_in_row(grid, row).map(|col| Coord::new(row as i32, col as i32))
            })
            .ok_or(PathError::NoOpenCell)?;
        log::debug!("hallway starts at {seed}");
        self.try_walk_hallway_from(seed)
    }

    /// [`try_walk_hallway`](Self::try_walk_hallway), empty on failure.
    pub fn walk_hallway(&self) -> Path {
        self.settle("walk hallway", self.try_walk_hallway())
    }

    /// [`try_walk_hallway_from`](Self::try_walk_hallway_from), empty on failure.
    pub fn walk_hallway_from(&self, seed: Coord) -> Path {
        self.settle("walk hallway", self.try_walk_hallway_from(seed))
    }
}
