use super::*;
use crate::helpers::*;

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_with_args(args: Vec<&str>) -> Result<(), GenericError> {
    let matches = get_analyze_app().try_get_matches_from(args).unwrap();

    run_analyze(&matches, |_| BufWriter::new(Box::new(DummyWrite {})))
}

#[test]
fn can_run_analyze_with_report_file_and_plots() {
    let dir = create_results_dir(&[("a.txt", VALID_RESULTS)]);
    let out_dir = tempfile::tempdir().unwrap();
    let plot_dir = out_dir.path().join("plots");
    let report_path = out_dir.path().join("report.json");
    let args = vec![
        "analyze",
        dir.path().to_str().unwrap(),
        "--plot-dir",
        plot_dir.to_str().unwrap(),
        "--format",
        "json",
        "--out-result",
        report_path.to_str().unwrap(),
        "--quiet",
    ];
    let matches = get_analyze_app().try_get_matches_from(args).unwrap();

    run_analyze(&matches, create_write_buffer).unwrap();

    assert!(plot_dir.join("a.txt.svg").exists());
    let report = std::fs::read_to_string(report_path).unwrap();
    assert!(report.contains("\"paretoFront\""));
}

#[test]
fn can_run_analyze_without_plots() {
    let dir = create_results_dir(&[("a.txt", VALID_RESULTS)]);
    let plot_dir = dir.path().join("plots");

    let result = run_with_args(vec![
        "analyze",
        dir.path().to_str().unwrap(),
        "--plot-dir",
        plot_dir.to_str().unwrap(),
        "--no-plot",
        "--all-fronts",
        "--parallel",
        "-q",
    ]);

    assert!(result.is_ok());
    assert!(!plot_dir.exists());
}

#[test]
fn can_return_error_summary_for_failed_files() {
    let dir = create_results_dir(&[("a.txt", VALID_RESULTS), ("b.txt", ODD_RESULTS), ("c.txt", NAN_RESULTS)]);

    let result = run_with_args(vec!["analyze", dir.path().to_str().unwrap(), "--no-plot", "-q"]);

    let err = result.unwrap_err().to_string();
    assert!(err.starts_with("2 file(s) cannot be analyzed:\n"));
    assert!(err.contains("b.txt"));
    assert!(err.contains("c.txt"));
}

#[test]
fn can_stop_at_first_failed_file() {
    let dir = create_results_dir(&[("a.txt", ODD_RESULTS), ("b.txt", NAN_RESULTS)]);

    let result = run_with_args(vec!["analyze", dir.path().to_str().unwrap(), "--no-plot", "--fail-fast", "-q"]);

    assert!(result.unwrap_err().to_string().starts_with("1 file(s) cannot be analyzed:\n"));
}

#[test]
fn can_reject_unknown_format() {
    let result = get_analyze_app().try_get_matches_from(vec!["analyze", "results/", "--format", "xml"]);

    assert!(result.is_err());
}
