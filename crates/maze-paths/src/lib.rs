//! Traversal and search algorithms over binary maze grids.
//!
//! Every operation hangs off [`Navigator`], which borrows a loaded
//! [`GridModel`](maze_core::GridModel) read-only:
//!
//! - **Linear scans** for the first open cell of a row or column
//!   ([`Navigator::scan_row`], [`Navigator::scan_column`])
//! - **Hallway walk** along one straight run of open cells
//!   ([`Navigator::walk_hallway`])
//! - **Room crossing** from an entrance to a single exit
//!   ([`Navigator::room_path`])
//! - **Winding path** depth-first search that rejects forks
//!   ([`Navigator::winding_path`])
//! - **A\*** best-first search between two open cells
//!   ([`Navigator::shortest_path`], [`Navigator::solve`])
//!
//! Each returns a [`Path`](maze_core::Path) that is empty when there is no
//! result. The `try_` variants return a [`PathError`] with the reason
//! instead.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | winding-path DFS |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod distance;
mod error;
mod hallway;
mod navigator;
mod room;
mod scan;
mod traits;
mod winding;

pub use distance::manhattan;
pub use error::PathError;
pub use navigator::Navigator;
pub use traits::{AstarPather, Pather};
