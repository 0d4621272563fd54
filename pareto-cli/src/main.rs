//! A command line interface to analyze Pareto fronts of travelling thief problem results.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod cli;
mod commands;

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}
