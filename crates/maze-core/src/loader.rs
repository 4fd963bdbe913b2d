//! Map text loading.
//!
//! A map is one line per row; each character is `'0'` (open) or `'1'`
//! (wall) and every line has the length of the first. Empty text is a valid
//! map with zero rows.

use std::fs;
use std::path::Path;

use crate::cell::Cell;
use crate::error::LoadError;
use crate::grid::Grid;

/// Parse map text into a [`Grid`].
///
/// Lines may end in `\n` or `\r\n`; a trailing terminator does not add a row.
pub fn parse_map(text: &str) -> Result<Grid, LoadError> {
    parse_lines(text.lines())
}

/// Parse pre-split map lines into a [`Grid`].
///
/// Lines are validated in order: a line is first checked against the
/// first line's length, then character by character.
pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Grid, LoadError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut width = None;

    for (line, text) in lines.into_iter().enumerate() {
        let found = text.chars().count();
        let expected = *width.get_or_insert(found);
        if found != expected {
            return Err(LoadError::RaggedRow {
                line,
                expected,
                found,
            });
        }

        let row = text
            .chars()
            .enumerate()
            .map(|(column, ch)| Cell::from_char(ch).ok_or(LoadError::InvalidChar { ch, line, column }))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Read and parse a map file.
pub fn read_map(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let grid = parse_map(&text)?;
    log::debug!(
        "loaded map {} ({} rows x {} columns)",
        path.display(),
        grid.height(),
        grid.width()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn map_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("maps").join(name)
    }

    #[test]
    fn parse_single_row() {
        let g = parse_map("101111").unwrap();
        assert_eq!(g.height(), 1);
        assert_eq!(g.width(), 6);
    }

    #[test]
    fn parse_handles_crlf_and_trailing_newline() {
        let g = parse_map("01\r\n10\r\n").unwrap();
        assert_eq!(g.height(), 2);
        assert_eq!(g.width(), 2);
        assert_eq!(g.to_string(), "01\n10\n");
    }

    #[test]
    fn parse_empty_text() {
        let g = parse_map("").unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            parse_map("0101\n010\n"),
            Err(LoadError::RaggedRow {
                line: 1,
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn parse_rejects_foreign_characters() {
        assert_eq!(
            parse_map("010\n0x0\n"),
            Err(LoadError::InvalidChar {
                ch: 'x',
                line: 1,
                column: 1
            })
        );
        assert!(parse_map("0 1").is_err());
    }

    #[test]
    fn read_fixture_files() {
        let g = read_map(map_path("single_row.txt")).unwrap();
        assert_eq!((g.height(), g.width()), (1, 6));

        let g = read_map(map_path("multiple_rows.txt")).unwrap();
        assert_eq!((g.height(), g.width()), (10, 10));

        let g = read_map(map_path("empty.txt")).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn read_rejects_bad_files() {
        assert!(matches!(
            read_map(map_path("ragged_rows.txt")),
            Err(LoadError::RaggedRow { .. })
        ));
        assert!(matches!(
            read_map(map_path("does_not_exist.txt")),
            Err(LoadError::NotFound(_))
        ));
        assert!(matches!(read_map(""), Err(LoadError::NotFound(_))));
        // A directory is not a map file.
        assert!(matches!(
            read_map(env!("CARGO_MANIFEST_DIR")),
            Err(LoadError::NotFound(_))
        ));
    }

    // ── Properties ──────────────────────────────────────────────

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn well_formed_text_keeps_dimensions(
            rows in prop::collection::vec(prop::collection::vec(prop::bool::ANY, 7), 1..12)
        ) {
            let text: String = rows
                .iter()
                .map(|r| r.iter().map(|&w| if w { '1' } else { '0' }).collect::<String>() + "\n")
                .collect();
            let g = parse_map(&text).unwrap();
            prop_assert_eq!(g.height(), rows.len());
            prop_assert_eq!(g.width(), 7);
            prop_assert_eq!(g.to_string(), text);
        }

        #[test]
        fn any_shorter_row_is_rejected(height in 2usize..10, bad in 0usize..10, width in 2usize..10) {
            let bad = bad % height;
            let text: Vec<String> = (0..height)
                .map(|r| "0".repeat(if r == bad && r > 0 { width - 1 } else { width }))
                .collect();
            let result = parse_lines(text.iter().map(String::as_str));
            if bad == 0 {
                prop_assert!(result.is_ok());
            } else {
                let is_ragged = matches!(result, Err(LoadError::RaggedRow { .. }));
                prop_assert!(is_ragged);
            }
        }
    }
}
