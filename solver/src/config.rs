//! Command-line configuration.

use std::fmt;
use std::path::PathBuf;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// First open cell of a row.
    FirstOpen,
    Hallway,
    Room,
    Winding,
    /// A* from the top-row entrance to the bottom-row exit.
    #[default]
    Solve,
}

impl Mode {
    /// Map a 1-based mode number to a mode.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Self::FirstOpen),
            2 => Some(Self::Hallway),
            3 => Some(Self::Room),
            4 => Some(Self::Winding),
            5 => Some(Self::Solve),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstOpen => "first-open",
            Self::Hallway => "hallway",
            Self::Room => "room",
            Self::Winding => "winding",
            Self::Solve => "solve",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub map: PathBuf,
    pub mode: Mode,
    /// Row scanned in [`Mode::FirstOpen`].
    pub row: usize,
    pub json: bool,
    pub verbose: bool,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {flag}"))
}

/// Parse `args` (including the program name at index 0).
///
/// A mode number outside 1..=5 is ignored and the default mode kept.
pub fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut map = None;
    let mut mode = Mode::default();
    let mut row = 0;
    let mut json = false;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--map" | "-m" => {
                map = Some(PathBuf::from(value(args, i, "--map")?));
                i += 1;
            }
            "--mode" | "-u" => {
                let raw = value(args, i, "--mode")?;
                let n: u32 = raw
                    .parse()
                    .map_err(|_| format!("Invalid mode number: {raw}"))?;
                if let Some(m) = Mode::from_number(n) {
                    mode = m;
                }
                i += 1;
            }
            "--row" | "-r" => {
                let raw = value(args, i, "--row")?;
                row = raw.parse().map_err(|_| format!("Invalid row: {raw}"))?;
                i += 1;
            }
            "--json" => {
                json = true;
            }
            "--verbose" | "-v" => {
                verbose = true;
            }
            "--help" | "-h" => {
                return Err("Help requested".to_string());
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    let map = map.ok_or("Missing map file (-m <file>)")?;

    Ok(Config {
        map,
        mode,
        row,
        json,
        verbose,
    })
}

pub fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {program} -m <MAP_FILE> [OPTIONS]

Run one traversal over a maze map of '0' (open) and '1' (wall) rows.

OPTIONS:
    -m, --map <FILE>    Map file to load
    -u, --mode <1..5>   1 first open cell, 2 hallway, 3 room,
                        4 winding path, 5 solve (default)
    -r, --row <N>       Row scanned by mode 1 (default 0)
        --json          Print the result as JSON
    -v, --verbose       Debug logging
    -h, --help          Show this help message

EXAMPLES:
    {program} -m maze.txt
    {program} -m maze.txt -u 2 --json
"#
    );
}
