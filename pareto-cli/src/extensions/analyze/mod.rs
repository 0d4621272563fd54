//! Analyzes results files: extracts Pareto fronts, renders plots and writes reports.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze/analyze_test.rs"]
mod analyze_test;

mod plot;
pub use self::plot::{DrawResult, draw_front_plot};

mod report;
pub use self::report::{FileReport, ReportFormat, write_report};

use pareto_core::prelude::*;
use pareto_core::utils::parallel_collect;
use pareto_results::ttp::{Solutions, TtpResults};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A logger type which is called with various information regarding the analysis progress.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies how results files are analyzed.
#[derive(Clone)]
pub struct AnalyzeConfig {
    /// A directory to write plots into, no plots are rendered when it is not set.
    pub plot_dir: Option<PathBuf>,
    /// Keeps all fronts in the analysis, not only the Pareto one.
    pub all_fronts: bool,
    /// Analyzes files in parallel.
    pub is_parallel: bool,
    /// Stops at the first file which cannot be analyzed.
    pub is_fail_fast: bool,
    /// A logger.
    pub logger: InfoLogger,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            plot_dir: None,
            all_fronts: false,
            is_parallel: false,
            is_fail_fast: false,
            logger: Arc::new(|msg: &str| eprintln!("{msg}")),
        }
    }
}

/// A result of a single results file analysis.
#[derive(Clone, Debug)]
pub struct FileAnalysis {
    /// A file identifier: its path as given.
    pub name: String,
    /// All solutions read from the file.
    pub solutions: Solutions,
    /// Fronts of solution indices ordered by rank.
    pub fronts: Vec<Vec<usize>>,
    /// Distinct points of the Pareto front in lexicographic order.
    pub pareto_front: Vec<Point>,
    /// A path to the rendered plot.
    pub plot_path: Option<PathBuf>,
}

impl FileAnalysis {
    /// Returns distinct points of the front with given rank in lexicographic order.
    pub fn front_points(&self, rank: usize) -> Vec<Point> {
        self.fronts.get(rank).map(|front| deduplicate_sorted(&self.solutions.select(front))).unwrap_or_default()
    }
}

/// Analyzes a single results file: reads solutions, sorts them into fronts and, optionally,
/// renders the plot of all solutions against the Pareto front.
pub fn analyze_file(path: &Path, config: &AnalyzeConfig) -> GenericResult<FileAnalysis> {
    let name = path.display().to_string();
    let with_name = |err: String| GenericError::from(format!("cannot analyze '{name}': {err}"));

    (config.logger)(&format!("analyzing '{name}'"));

    let file = File::open(path).map_err(|err| with_name(err.to_string()))?;
    let solutions = BufReader::new(file).read_ttp_results().map_err(|err| with_name(err.to_string()))?;
    let fronts = get_fronts(solutions.points()).map_err(|err| with_name(err.to_string()))?;

    // fronts of non-empty set are never empty
    let front = fronts.first().map(|front| solutions.select(front)).unwrap_or_default();

    (config.logger)(&format!(
        "'{name}': {} solutions, {} fronts, {} solutions in the Pareto front",
        solutions.len(),
        fronts.len(),
        front.len()
    ));

    let plot_path = match config.plot_dir.as_ref() {
        Some(plot_dir) => {
            let plot_path = get_plot_path(plot_dir, path);
            draw_front_plot(plot_path.as_path(), name.as_str(), &solutions, front.as_slice())
                .map_err(|err| with_name(format!("cannot draw plot: '{err}'")))?;
            (config.logger)(&format!("'{name}': plot is written to '{}'", plot_path.display()));

            Some(plot_path)
        }
        None => None,
    };

    Ok(FileAnalysis { name, pareto_front: deduplicate_sorted(&front), solutions, fronts, plot_path })
}

/// Analyzes every regular file in the `results_dir` in file name order. A failure of one file does
/// not prevent analysis of others unless fail fast is configured.
pub fn analyze_directory(
    results_dir: &Path,
    config: &AnalyzeConfig,
) -> GenericResult<Vec<(PathBuf, GenericResult<FileAnalysis>)>> {
    let paths = get_result_files(results_dir)?;

    if paths.is_empty() {
        (config.logger)(&format!("no results files found in '{}'", results_dir.display()));
    }

    if let Some(plot_dir) = config.plot_dir.as_ref() {
        fs::create_dir_all(plot_dir)
            .map_err(|err| format!("cannot create plot directory '{}': '{err}'", plot_dir.display()))?;
    }

    let results = if config.is_parallel {
        let results = parallel_collect(&paths, |path| analyze_file(path, config));
        let results = paths.into_iter().zip(results).collect::<Vec<_>>();

        if config.is_fail_fast {
            let take = results.iter().position(|(_, result)| result.is_err()).map_or(results.len(), |idx| idx + 1);
            results.into_iter().take(take).collect()
        } else {
            results
        }
    } else {
        let mut results = Vec::with_capacity(paths.len());
        for path in paths {
            let result = analyze_file(path.as_path(), config);
            let is_err = result.is_err();
            results.push((path, result));

            if is_err && config.is_fail_fast {
                break;
            }
        }

        results
    };

    (config.logger)(&format!(
        "analyzed {} file(s), {} failed",
        results.len(),
        results.iter().filter(|(_, result)| result.is_err()).count()
    ));

    Ok(results)
}

fn get_result_files(results_dir: &Path) -> GenericResult<Vec<PathBuf>> {
    let entries = fs::read_dir(results_dir)
        .map_err(|err| format!("cannot read results directory '{}': '{err}'", results_dir.display()))?;

    let mut paths = entries
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("cannot read results directory entry: '{err}'"))?;

    paths.retain(|path| path.is_file());
    paths.sort();

    Ok(paths)
}

fn get_plot_path(plot_dir: &Path, path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or_default();

    plot_dir.join(format!("{file_name}.svg"))
}
