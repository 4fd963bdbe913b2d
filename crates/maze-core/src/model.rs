//! The loaded-maze holder.
//!
//! [`GridModel`] owns a [`Grid`] together with whether the last load
//! succeeded. Load failures are recorded, logged and swallowed: a failed
//! model holds an empty grid and every query against it comes back empty.

use std::path::Path;

use crate::error::LoadError;
use crate::grid::Grid;
use crate::loader;

/// A maze grid plus its initialization state.
#[derive(Debug, Clone, Default)]
pub struct GridModel {
    grid: Grid,
    failure: Option<LoadError>,
    initialized: bool,
}

impl GridModel {
    /// Build a model from the outcome of a load.
    pub fn from_result(result: Result<Grid, LoadError>) -> Self {
        let mut model = Self::default();
        model.apply(result);
        model
    }

    /// Load a model from a map file.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::from_result(loader::read_map(path))
    }

    /// Load a model from map text.
    pub fn from_text(text: &str) -> Self {
        Self::from_result(loader::parse_map(text))
    }

    /// Wrap an already validated grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self::from_result(Ok(grid))
    }

    /// Replace the whole grid with the contents of another map file.
    pub fn reload(&mut self, path: impl AsRef<Path>) {
        self.apply(loader::read_map(path));
    }

    fn apply(&mut self, result: Result<Grid, LoadError>) {
        match result {
            Ok(grid) => {
                self.grid = grid;
                self.failure = None;
                self.initialized = true;
            }
            Err(err) => {
                log::error!("{err}");
                self.grid = Grid::default();
                self.failure = Some(err);
                self.initialized = false;
            }
        }
    }

    /// Whether the last (re)load succeeded.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The loaded grid. Empty when the model failed to initialize.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Why the last load failed, if it did.
    pub fn failure(&self) -> Option<&LoadError> {
        self.failure.as_ref()
    }
}
