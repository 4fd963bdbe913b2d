//! **maze-core**: binary-occupancy maze grids.
//!
//! This crate provides the data side of the maze tools: [`Coord`] positions,
//! [`Cell`] occupancy, the rectangular [`Grid`], the map-text loader and the
//! [`GridModel`] that records whether a load succeeded.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod loader;
pub mod model;

pub use cell::Cell;
pub use error::LoadError;
pub use geom::{Coord, Path};
pub use grid::Grid;
pub use loader::{parse_map, read_map};
pub use model::GridModel;
