use clap::{command, value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_INPUT: &str = "./popu-pref.csv";

pub fn register_args() -> Command {
    command!() // requires `cargo` feature
        .next_line_help(true)
        .arg(
            Arg::new("input")
                .required(false)
                .long("input")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_INPUT)
                .help(concat!(
                    "Census CSV to read. Column 0 is the year, column 2 the region ",
                    "and column 7 the sub-population count"
                )),
        )
        .arg(
            Arg::new("log-level")
                .required(false)
                .long("log-level")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Level))
                .default_value("warn")
                .help("Most verbose diagnostic level written to stderr (error, warn, info, debug, trace)"),
        )
}
