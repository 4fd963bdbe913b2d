//! Errors produced while loading a map.

use std::fmt;
use std::path::PathBuf;

/// Why a map could not be turned into a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The path does not name a regular file.
    NotFound(PathBuf),
    /// The file exists but could not be read.
    Io { path: PathBuf, message: String },
    /// A row's length differs from the first row's.
    RaggedRow {
        /// 0-based row index of the offending line.
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `'0'` or `'1'`.
    InvalidChar { ch: char, line: usize, column: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "map file does not exist: {}", path.display()),
            Self::Io { path, message } => {
                write!(f, "could not read map file {}: {message}", path.display())
            }
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "invalid map: row {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, line, column } => write!(
                f,
                "invalid map: unexpected character '{ch}' at ({line}, {column})"
            ),
        }
    }
}

impl std::error::Error for LoadError {}
