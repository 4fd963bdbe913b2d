use std::collections::{HashMap, HashSet};

use maze_core::{Coord, Path};

use crate::Navigator;
use crate::error::PathError;
use crate::scan::first_open_in_row;
use crate::traits::AstarPather;

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// A discovered coordinate with its search scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchNode {
    pub(crate) pos: Coord,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<Coord>,
}

impl SearchNode {
    fn new(pos: Coord, g: i32, h: i32, parent: Option<Coord>) -> Self {
        Self {
            pos,
            g,
            h,
            f: g + h,
            parent,
        }
    }

    /// Whether `self` is expanded before `other`.
    ///
    /// Nodes are ordered by `h`; when the `f` scores are equal the key
    /// `h + 10 * row` decides instead. This is a greedy order, not the
    /// textbook `f`-then-`h` one, and paths depend on it.
    fn precedes(&self, other: &Self) -> bool {
        if self.f == other.f {
            self.h + 10 * self.pos.row < other.h + 10 * other.pos.row
        } else {
            self.h < other.h
        }
    }
}

/// Open set of the search.
///
/// Nodes are kept in discovery order and the minimum is selected when
/// popped, so updating a node's scores in place can never leave the
/// ordering stale. Among nodes where neither precedes the other, the
/// earliest discovered wins.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    nodes: Vec<SearchNode>,
}

impl Frontier {
    fn push(&mut self, node: SearchNode) {
        self.nodes.push(node);
    }

    fn pop_min(&mut self) -> Option<SearchNode> {
        if self.nodes.is_empty() {
            return None;
        }
        let mut best = 0;
        for i in 1..self.nodes.len() {
            if self.nodes[i].precedes(&self.nodes[best]) {
                best = i;
            }
        }
        Some(self.nodes.remove(best))
    }

    fn find_mut(&mut self, pos: Coord) -> Option<&mut SearchNode> {
        self.nodes.iter_mut().find(|n| n.pos == pos)
    }
}

/// Best-first search from `from` to `to` over `pather`.
pub(crate) fn astar<P: AstarPather>(pather: &P, from: Coord, to: Coord) -> Option<Path> {
    let mut frontier = Frontier::default();
    let mut closed: HashSet<Coord> = HashSet::new();
    let mut parents: HashMap<Coord, Coord> = HashMap::new();
    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    frontier.push(SearchNode::new(from, 0, pather.estimate(from, to), None));

    while let Some(current) = frontier.pop_min() {
        if current.pos == to {
            log::trace!("astar reached {to} after {expanded} expansions");
            return Some(reconstruct(&parents, to));
        }
        closed.insert(current.pos);
        expanded += 1;

        nbuf.clear();
        pather.neighbors(current.pos, &mut nbuf);

        for &np in nbuf.iter() {
            if closed.contains(&np) {
                continue;
            }
            let g = current.g + 1;
            let h = pather.estimate(np, to);
            match frontier.find_mut(np) {
                Some(node) => {
                    if g + h < node.f {
                        *node = SearchNode::new(np, g, h, Some(current.pos));
                        parents.insert(np, current.pos);
                    }
                }
                None => {
                    frontier.push(SearchNode::new(np, g, h, Some(current.pos)));
                    parents.insert(np, current.pos);
                }
            }
        }
    }

    log::trace!("astar exhausted the frontier after {expanded} expansions");
    None
}

/// Follow parent links back from `goal`, then reverse into start→goal order.
fn reconstruct(parents: &HashMap<Coord, Coord>, goal: Coord) -> Path {
    let mut path = vec![goal];
    let mut c = goal;
    while let Some(&p) = parents.get(&c) {
        path.push(p);
        c = p;
    }
    path.reverse();
    path
}

impl Navigator<'_> {
    /// Compute a path from `start` to `end` with best-first (A*) search.
    ///
    /// Both endpoints must be open cells inside the grid. An unreachable
    /// goal yields [`PathError::Unreachable`].
    pub fn try_shortest_path(&self, start: Coord, end: Coord) -> Result<Path, PathError> {
        let grid = self.guard()?;
        if !grid.is_open(start) {
            return Err(PathError::InvalidStart(start));
        }
        if !grid.is_open(end) {
            return Err(PathError::InvalidEnd(end));
        }
        if start == end {
            return Ok(vec![start]);
        }
        astar(grid, start, end).ok_or(PathError::Unreachable)
    }

    /// Solve the maze from the first open cell of the top row to the first
    /// open cell of the bottom row.
    pub fn try_solve(&self) -> Result<Path, PathError> {
        let grid = self.guard()?;
        let last = grid.height() - 1;
        let start = first_open_in_row(grid, 0).ok_or(PathError::NoEntrance)?;
        let end = first_open_in_row(grid, last).ok_or(PathError::NoExit)?;
        let start = Coord::new(0, start as i32);
        let end = Coord::new(last as i32, end as i32);
        log::debug!("solving maze from {start} to {end}");
        self.try_shortest_path(start, end)
    }

    /// [`try_shortest_path`](Self::try_shortest_path), empty on failure.
    pub fn shortest_path(&self, start: Coord, end: Coord) -> Path {
        self.settle("shortest path", self.try_shortest_path(start, end))
    }

    /// [`try_solve`](Self::try_solve), empty on failure.
    pub fn solve(&self) -> Path {
        self.settle("solve", self.try_solve())
    }
}
