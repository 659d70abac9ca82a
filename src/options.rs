//! Parsing Options.
//! `--mode {run|stats}` or `-m`; numeric flags left unset fall back to the
//! config file and then to built-in defaults.

use clap::{Arg, Command, value_parser};
use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One animated run rendered to stdout.
    Run,
    /// Monte Carlo threshold estimation.
    Stats,
}

fn make_options_parser() -> clap::Command {
    Command::new("perc")
        .no_binary_name(true)
        .version("v0.1.0")
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help("What to do: a single animated run or threshold statistics")
                .default_value("run")
                .value_parser(["run", "stats"]),
        )
        .arg(
            Arg::new("size")
                .short('n')
                .long("size")
                .help("Grid dimension")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("trials")
                .short('t')
                .long("trials")
                .help("Number of independent trials in stats mode")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("delay")
                .short('d')
                .long("delay")
                .help("Milliseconds to sleep between rendered steps in run mode")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Fixed RNG seed for reproducible runs")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the stats report will be stored")
                .default_value("percolation.json"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to the TOML config file")
                .default_value("percolate.toml"),
        )
}

#[derive(Debug)]
pub struct Options {
    pub mode: Mode,
    pub size: Option<usize>,
    pub trials: Option<usize>,
    pub delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub output: String,
    pub config: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            mode: Mode::Run,
            size: None,
            trials: None,
            delay_ms: None,
            seed: None,
            output: "percolation.json".to_string(),
            config: "percolate.toml".to_string(),
        }
    }
}

impl Options {
    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let mode = match matches.get_one::<String>("mode").map(String::as_str) {
            Some("run") => Mode::Run,
            Some("stats") => Mode::Stats,
            _ => return Err("UnsupportedMode")?,
        };

        let output = matches.get_one::<String>("output").unwrap().to_string();
        let config = matches.get_one::<String>("config").unwrap().to_string();

        Ok(Options {
            mode,
            size: matches.get_one::<usize>("size").copied(),
            trials: matches.get_one::<usize>("trials").copied(),
            delay_ms: matches.get_one::<u64>("delay").copied(),
            seed: matches.get_one::<u64>("seed").copied(),
            output,
            config,
        })
    }
}
