use maze_core::{Coord, Grid};

/// Minimal traversal interface: neighbor enumeration.
pub trait Pather {
    /// Append the passable neighbors of `p` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Pather with a heuristic for best-first search.
pub trait AstarPather: Pather {
    /// Heuristic estimate of distance from `from` to `to`.
    fn estimate(&self, from: Coord, to: Coord) -> i32;
}

impl Pather for Grid {
    /// Open cells among left, right, up, down.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_open(n)));
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        crate::manhattan(from, to)
    }
}
