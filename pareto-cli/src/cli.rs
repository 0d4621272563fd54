#[cfg(test)]
#[path = "../tests/unit/cli_test.rs"]
mod cli_test;

use crate::commands::analyze::{get_analyze_app, run_analyze};
use crate::commands::create_write_buffer;
use clap::{ArgMatches, Command};
use std::process;

pub fn get_app() -> Command {
    Command::new("Pareto Front Analyzer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to analyze Pareto fronts of travelling thief problem results")
        .subcommand(get_analyze_app())
}

pub fn run_subcommand(arg_matches: ArgMatches) {
    let result = match arg_matches.subcommand() {
        Some(("analyze", analyze_matches)) => run_analyze(analyze_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
