//! Command-line front end for the maze traversals.
//!
//! [`parse_args`] builds a [`Config`], [`run`] loads the map it names and
//! dispatches to the selected [`Navigator`] operation, and the resulting
//! [`Report`] prints as text or JSON.
//!
//! Nothing here fails: a map that does not load leaves the model
//! uninitialized and every mode reports an empty result.

pub mod config;
pub mod report;

pub use config::{Config, Mode, parse_args, print_usage};
pub use report::Report;

use maze_core::GridModel;
use maze_paths::Navigator;

/// Load the configured map and run the configured traversal on it.
pub fn run(config: &Config) -> Report {
    let model = GridModel::open(&config.map);
    if model.is_initialized() {
        log::info!(
            "loaded {} ({}x{})",
            config.map.display(),
            model.grid().width(),
            model.grid().height()
        );
    }
    execute(&model, config.mode, config.row)
}

/// Run `mode` against a model.
pub fn execute(model: &GridModel, mode: Mode, row: usize) -> Report {
    let nav = Navigator::new(model);
    let result = match mode {
        Mode::FirstOpen => nav.try_first_open_in_row(row),
        Mode::Hallway => nav.try_walk_hallway(),
        Mode::Room => nav.try_room_path(),
        Mode::Winding => nav.try_winding_path(),
        Mode::Solve => nav.try_solve(),
    };
    match result {
        Ok(path) => {
            log::debug!("{mode}: {} cells", path.len());
            Report::new(mode, row, path)
        }
        Err(err) => {
            if err.is_invalid_input() {
                log::warn!("{mode}: {err}");
            } else {
                log::debug!("{mode}: {err}");
            }
            Report::failed(mode, row, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use maze_core::Coord;
    use maze_paths::PathError;

    fn map(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../crates/maze-core/maps")
            .join(name)
    }

    fn config(name: &str, mode: Mode) -> Config {
        Config {
            map: map(name),
            mode,
            row: 0,
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn first_open_from_file() {
        let report = run(&config("single_row.txt", Mode::FirstOpen));
        assert_eq!(report.path, vec![Coord::new(0, 1)]);
        assert_eq!(
            report.to_string(),
            "First empty space in row 1 is at column 2"
        );
    }

    #[test]
    fn every_mode_on_fixture() {
        let run_mode = |mode| run(&config("multiple_rows.txt", mode));

        let report = run_mode(Mode::FirstOpen);
        assert_eq!(report.path, vec![Coord::new(0, 0)]);

        let report = run_mode(Mode::Hallway);
        assert_eq!(
            report.path,
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );

        // Down column 0 to (2, 0), but (2, 1) is a wall.
        let report = run_mode(Mode::Room);
        assert_eq!(report.error, Some(PathError::InvalidExit(Coord::new(2, 0))));

        // (1, 0) has three open neighbours.
        let report = run_mode(Mode::Winding);
        assert!(matches!(report.error, Some(PathError::Fork { .. })));

        // The exit at (9, 1) is walled in on every side.
        let report = run_mode(Mode::Solve);
        assert!(report.is_empty());
        assert_eq!(report.error, Some(PathError::Unreachable));
        assert_eq!(report.to_string(), "No path found or an error occurred.");
    }

    #[test]
    fn load_failures_report_no_path() {
        for name in ["no_such_map.txt", "ragged_rows.txt", "invalid_chars.txt"] {
            let report = run(&config(name, Mode::Hallway));
            assert!(report.is_empty(), "{name}");
            assert_eq!(report.error, Some(PathError::Uninitialized), "{name}");
            assert_eq!(report.to_string(), "No path found or an error occurred.");
        }

        let report = run(&config("no_such_map.txt", Mode::FirstOpen));
        assert_eq!(
            report.to_string(),
            "No empty space in row 1 or an error occurred."
        );
    }

    #[test]
    fn dispatch_matches_navigator() {
        let model = GridModel::from_text("1011\n1011\n1000");
        let nav = Navigator::new(&model);
        assert_eq!(execute(&model, Mode::Hallway, 0).path, nav.walk_hallway());
        assert_eq!(execute(&model, Mode::Room, 0).path, nav.room_path());
        assert_eq!(execute(&model, Mode::Winding, 0).path, nav.winding_path());
        assert_eq!(execute(&model, Mode::Solve, 0).path, nav.solve());
        assert_eq!(
            execute(&model, Mode::FirstOpen, 2).path,
            vec![Coord::new(2, 1)]
        );
    }
}
