#[cfg(test)]
#[path = "../../tests/unit/commands/analyze_test.rs"]
mod analyze_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use pareto_cli::core::prelude::GenericError;
use pareto_cli::extensions::analyze::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

const RESULTS_DIR_ARG_NAME: &str = "RESULTS_DIR";
const PLOT_DIR_ARG_NAME: &str = "plot-dir";
const NO_PLOT_ARG_NAME: &str = "no-plot";
const FORMAT_ARG_NAME: &str = "format";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const ALL_FRONTS_ARG_NAME: &str = "all-fronts";
const PARALLEL_ARG_NAME: &str = "parallel";
const FAIL_FAST_ARG_NAME: &str = "fail-fast";
const QUIET_ARG_NAME: &str = "quiet";

pub fn get_analyze_app() -> Command {
    Command::new("analyze")
        .about("Extracts Pareto fronts of all results files in the directory, prints and plots them")
        .arg(
            Arg::new(RESULTS_DIR_ARG_NAME)
                .help("Sets the directory with results files")
                .default_value("results/")
                .index(1),
        )
        .arg(
            Arg::new(PLOT_DIR_ARG_NAME)
                .help("Specifies the directory to write svg plots into")
                .short('p')
                .long(PLOT_DIR_ARG_NAME)
                .default_value("plots/")
                .required(false),
        )
        .arg(
            Arg::new(NO_PLOT_ARG_NAME)
                .help("Disables plot rendering")
                .long(NO_PLOT_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies report format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for report output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ALL_FRONTS_ARG_NAME)
                .help("Reports all fronts ordered by rank, not only the Pareto one")
                .long(ALL_FRONTS_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(PARALLEL_ARG_NAME)
                .help("Analyzes files in parallel")
                .long(PARALLEL_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(FAIL_FAST_ARG_NAME)
                .help("Stops at the first file which cannot be analyzed")
                .long(FAIL_FAST_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(QUIET_ARG_NAME)
                .help("Disables progress logging")
                .short('q')
                .long(QUIET_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_analyze(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let results_dir = matches
        .get_one::<String>(RESULTS_DIR_ARG_NAME)
        .map(PathBuf::from)
        .ok_or_else(|| GenericError::from("results directory is not set"))?;
    let format = matches
        .get_one::<String>(FORMAT_ARG_NAME)
        .map(|format| ReportFormat::from_str(format))
        .transpose()?
        .unwrap_or(ReportFormat::Text);

    let config = get_analyze_config(matches);
    let results = analyze_directory(results_dir.as_path(), &config)?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut writer = out_writer_func(out_result);
    write_report(&mut writer, results.as_slice(), format, config.all_fronts)?;

    let errors = results.into_iter().filter_map(|(_, result)| result.err()).collect::<Vec<_>>();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("{} file(s) cannot be analyzed:\n{}", errors.len(), GenericError::join_many(&errors, "\n")).into())
    }
}

fn get_analyze_config(matches: &ArgMatches) -> AnalyzeConfig {
    let plot_dir = if matches.get_flag(NO_PLOT_ARG_NAME) {
        None
    } else {
        matches.get_one::<String>(PLOT_DIR_ARG_NAME).map(|path| Path::new(path).to_path_buf())
    };

    let logger: InfoLogger = if matches.get_flag(QUIET_ARG_NAME) {
        Arc::new(|_: &str| {})
    } else {
        Arc::new(|msg: &str| eprintln!("{msg}"))
    };

    AnalyzeConfig {
        plot_dir,
        all_fronts: matches.get_flag(ALL_FRONTS_ARG_NAME),
        is_parallel: matches.get_flag(PARALLEL_ARG_NAME),
        is_fail_fast: matches.get_flag(FAIL_FAST_ARG_NAME),
        logger,
    }
}
