//! maze-solver: run one traversal over a maze map file.
//!
//! ```bash
//! maze-solver -m maze.txt
//! maze-solver -m maze.txt -u 3 --json
//! RUST_LOG=trace maze-solver -m maze.txt
//! ```

use std::env;

use env_logger::Env;
use maze_solver_lib::{parse_args, print_usage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("maze-solver");
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    let level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let report = maze_solver_lib::run(&config);
    if config.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}
