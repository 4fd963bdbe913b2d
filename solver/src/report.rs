//! Rendering traversal results.

use std::fmt;

use maze_core::Path;
use maze_paths::PathError;

use crate::config::Mode;

/// The outcome of one traversal, ready to print.
///
/// The text form never names the failure reason; the JSON form carries it
/// in `error` when there is one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    pub mode: Mode,
    #[serde(skip)]
    pub row: usize,
    pub path: Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PathError>,
}

impl Report {
    pub fn new(mode: Mode, row: usize, path: Path) -> Self {
        Self {
            mode,
            row,
            path,
            error: None,
        }
    }

    pub fn failed(mode: Mode, row: usize, error: PathError) -> Self {
        Self {
            mode,
            row,
            path: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows and columns are 1-based in the first-open message.
        let row = self.row + 1;
        match (self.mode, self.path.first()) {
            (Mode::FirstOpen, Some(c)) => write!(
                f,
                "First empty space in row {row} is at column {}",
                c.col + 1
            ),
            (Mode::FirstOpen, None) => {
                write!(f, "No empty space in row {row} or an error occurred.")
            }
            (_, None) => f.write_str("No path found or an error occurred."),
            (_, Some(_)) => {
                f.write_str("Path Start -> ")?;
                for c in &self.path {
                    write!(f, "{c} -> ")?;
                }
                f.write_str("End")
            }
        }
    }
}
