//! Crossing a rectangular room.
//!
//! The entrance is the first open cell found scanning rows top to bottom.
//! Only that entrance is tried: a room behind a later row is never reached
//! if this one fails.

use maze_core::{Cell, Coord, Grid, Path};

use crate::Navigator;
use crate::error::PathError;
use crate::hallway::walk;
use crate::scan::first_open_in_row;

/// Which side of the entrance the room lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Below,
    Right,
}

impl Orientation {
    /// (step into the room, step across it).
    fn steps(self) -> (Coord, Coord) {
        match self {
            Self::Below => (Coord::DOWN, Coord::RIGHT),
            Self::Right => (Coord::RIGHT, Coord::DOWN),
        }
    }
}

fn first_entrance(grid: &Grid) -> Option<Coord> {
    (0..grid.height()).find_map(|row| {
        first_open_in_row(grid, row).map(|col| Coord::new(row as i32, col as i32))
    })
}

fn orientation(grid: &Grid, entrance: Coord) -> Result<Orientation, PathError> {
    match (
        grid.is_open(entrance + Coord::DOWN),
        grid.is_open(entrance + Coord::RIGHT),
    ) {
        (true, true) => Err(PathError::AmbiguousRoom(entrance)),
        (true, false) => Ok(Orientation::Below),
        (false, true) => Ok(Orientation::Right),
        (false, false) => Err(PathError::NoRoom(entrance)),
    }
}

impl Navigator<'_> {
    /// Enter the room behind the first entrance, cross it and leave.
    ///
    /// For a room below the entrance: walk down the entrance column, then
    /// right along the last row reached. The cell where that row walk stops
    /// is classified by its vertical neighbours:
    ///
    /// - wall above and wall (or grid edge) below: it is the exit itself;
    /// - open above and open below: the cell below is the exit and is
    ///   appended;
    /// - anything else: the room is invalid.
    ///
    /// A room to the right of the entrance is the transpose.
    pub fn try_room_path(&self) -> Result<Path, PathError> {
        let grid = self.guard()?;
        let entrance = first_entrance(grid).ok_or(PathError::NoEntrance)?;
        log::debug!("room entrance at {entrance}");

        let (inward, across) = orientation(grid, entrance)?.steps();

        let mut path = vec![entrance];
        walk(grid, entrance + inward, inward, &mut path);
        if path.len() <= 2 {
            return Err(PathError::RoomTooNarrow(entrance));
        }

        let corner = path[path.len() - 1];
        let turn = corner + across;
        if !grid.is_open(turn) {
            return Err(PathError::InvalidExit(corner));
        }
        walk(grid, turn, across, &mut path);

        let last = path[path.len() - 1];
        let near = grid.at(last - inward);
        let far = grid.at(last + inward);
        match (near, far) {
            (Some(Cell::Wall), Some(Cell::Wall) | None) => Ok(path),
            (Some(Cell::Open), Some(Cell::Open)) => {
                path.push(last + inward);
                Ok(path)
            }
            _ => Err(PathError::InvalidExit(last)),
        }
    }

    /// [`try_room_path`](Self::try_room_path), empty on failure.
    pub fn room_path(&self) -> Path {
        self.settle("room path", self.try_room_path())
    }
}
