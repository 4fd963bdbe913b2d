use maze_core::{Grid, GridModel, Path};

use crate::error::PathError;

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Entry point for every traversal over a loaded maze.
///
/// `Navigator` only borrows the [`GridModel`]; each operation owns its own
/// transient search state (stacks, visited sets, frontier), so any number of
/// navigators may query the same model, including from several threads.
///
/// The algorithms live in per-module `impl` blocks: scanning in `scan`,
/// straight walks in `hallway`, rooms in `room`, the fork-free DFS in
/// `winding` and best-first search in `astar`.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    pub(crate) model: &'a GridModel,
}

impl<'a> Navigator<'a> {
    /// Create a navigator over `model`.
    pub fn new(model: &'a GridModel) -> Self {
        Self { model }
    }

    /// The model being navigated.
    #[inline]
    pub fn model(&self) -> &'a GridModel {
        self.model
    }

    /// The grid, provided the model loaded and has at least one row.
    pub(crate) fn guard(&self) -> Result<&'a Grid, PathError> {
        if !self.model.is_initialized() {
            return Err(PathError::Uninitialized);
        }
        let grid = self.model.grid();
        if grid.is_empty() {
            return Err(PathError::EmptyGrid);
        }
        Ok(grid)
    }

    /// Collapse a traversal result into a path, logging the failure reason.
    pub(crate) fn settle(&self, op: &str, result: Result<Path, PathError>) -> Path {
        match result {
            Ok(path) => {
                log::debug!("{op}: {} cells", path.len());
                path
            }
            Err(err) => {
                self.report(op, err);
                Vec::new()
            }
        }
    }

    pub(crate) fn report(&self, op: &str, err: PathError) {
        if err.is_invalid_input() {
            log::warn!("{op}: {err}");
        } else {
            log::debug!("{op}: {err}");
        }
    }
}
