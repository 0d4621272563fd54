#[cfg(test)]
#[path = "../../../tests/unit/extensions/analyze/report_test.rs"]
mod report_test;

use super::FileAnalysis;
use pareto_core::prelude::*;
use pareto_results::ttp::{write_text_front, write_text_fronts};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Specifies report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per file with its Pareto front.
    Text,
    /// An array of file reports.
    Json,
}

impl FromStr for ReportFormat {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("unknown report format: '{value}'").into()),
        }
    }
}

/// A serializable report of a single file analysis.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    /// A file identifier.
    pub name: String,
    /// An error message, if file cannot be analyzed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Total amount of solutions.
    pub solutions: usize,
    /// Total amount of fronts.
    pub fronts: usize,
    /// Distinct `(travel_time, negative_profit)` points of the Pareto front.
    pub pareto_front: Vec<Point>,
    /// Distinct points of every front ordered by rank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_fronts: Option<Vec<Vec<Point>>>,
    /// A path to the rendered plot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
}

impl FileReport {
    fn new(path: &Path, result: &GenericResult<FileAnalysis>, all_fronts: bool) -> Self {
        match result {
            Ok(analysis) => Self {
                name: analysis.name.clone(),
                error: None,
                solutions: analysis.solutions.len(),
                fronts: analysis.fronts.len(),
                pareto_front: analysis.pareto_front.clone(),
                all_fronts: all_fronts.then(|| get_all_fronts(analysis)),
                plot: analysis.plot_path.as_ref().map(|path| path.display().to_string()),
            },
            Err(err) => Self {
                name: path.display().to_string(),
                error: Some(err.to_string()),
                solutions: 0,
                fronts: 0,
                pareto_front: vec![],
                all_fronts: None,
                plot: None,
            },
        }
    }
}

/// Writes report of analyzed files. Text format contains only successfully analyzed files,
/// failures are expected to be reported separately.
pub fn write_report<W: Write>(
    writer: &mut BufWriter<W>,
    results: &[(PathBuf, GenericResult<FileAnalysis>)],
    format: ReportFormat,
    all_fronts: bool,
) -> GenericResult<()> {
    match format {
        ReportFormat::Text => results.iter().filter_map(|(_, result)| result.as_ref().ok()).try_for_each(|analysis| {
            if all_fronts {
                write_text_fronts(writer, analysis.name.as_str(), &get_all_fronts(analysis))
            } else {
                write_text_front(writer, analysis.name.as_str(), analysis.pareto_front.as_slice())
            }
        })?,
        ReportFormat::Json => {
            let reports =
                results.iter().map(|(path, result)| FileReport::new(path, result, all_fronts)).collect::<Vec<_>>();

            serde_json::to_writer_pretty(&mut *writer, &reports)
                .map_err(|err| format!("cannot write json report: '{err}'"))?;
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()?;

    Ok(())
}

fn get_all_fronts(analysis: &FileAnalysis) -> Vec<Vec<Point>> {
    (0..analysis.fronts.len()).map(|rank| analysis.front_points(rank)).collect()
}
