use super::*;
use crate::extensions::analyze::{AnalyzeConfig, analyze_directory};
use crate::helpers::*;
use std::sync::Arc;

fn get_results(files: &[(&str, &str)]) -> (tempfile::TempDir, Vec<(PathBuf, GenericResult<FileAnalysis>)>) {
    let dir = create_results_dir(files);
    let config = AnalyzeConfig { logger: Arc::new(|_: &str| {}), ..AnalyzeConfig::default() };
    let results = analyze_directory(dir.path(), &config).unwrap();

    (dir, results)
}

fn write_to_string(
    results: &[(PathBuf, GenericResult<FileAnalysis>)],
    format: ReportFormat,
    all_fronts: bool,
) -> String {
    let mut buffer = Vec::new();
    {
        let mut writer = BufWriter::new(&mut buffer);
        write_report(&mut writer, results, format, all_fronts).unwrap();
    }

    String::from_utf8(buffer).unwrap()
}

#[test]
fn can_parse_report_format() {
    assert_eq!(ReportFormat::from_str("text"), Ok(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("json"), Ok(ReportFormat::Json));
    assert_eq!(ReportFormat::from_str("xml"), Err(GenericError::from("unknown report format: 'xml'")));
}

#[test]
fn can_write_text_report_without_failures() {
    let (dir, results) = get_results(&[("a.txt", VALID_RESULTS), ("b.txt", ODD_RESULTS)]);

    let report = write_to_string(&results, ReportFormat::Text, false);

    assert_eq!(report, format!("{} : [(1, -1), (2, -3), (3, -5)]\n", dir.path().join("a.txt").display()));
}

#[test]
fn can_write_text_report_with_all_fronts() {
    let (dir, results) = get_results(&[("a.txt", VALID_RESULTS)]);
    let name = dir.path().join("a.txt").display().to_string();

    let report = write_to_string(&results, ReportFormat::Text, true);

    assert_eq!(report, format!("{name} : front 0 : [(1, -1), (2, -3), (3, -5)]\n{name} : front 1 : [(2, -2)]\n"));
}

#[test]
fn can_write_json_report() {
    let (dir, results) = get_results(&[("a.txt", VALID_RESULTS), ("b.txt", NAN_RESULTS)]);

    let report = write_to_string(&results, ReportFormat::Json, true);

    let value: serde_json::Value = serde_json::from_str(report.as_str()).unwrap();
    let reports = value.as_array().unwrap();
    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0]["name"], dir.path().join("a.txt").display().to_string());
    assert_eq!(reports[0]["solutions"], 5);
    assert_eq!(reports[0]["fronts"], 2);
    assert_eq!(reports[0]["paretoFront"], serde_json::json!([[1., -1.], [2., -3.], [3., -5.]]));
    assert_eq!(reports[0]["allFronts"][1], serde_json::json!([[2., -2.]]));
    assert!(reports[0].get("error").is_none());
    assert!(reports[0].get("plot").is_none());

    assert!(reports[1]["error"].as_str().unwrap().contains("numeric error"));
    assert_eq!(reports[1]["paretoFront"], serde_json::json!([]));
}
