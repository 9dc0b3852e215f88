#[cfg(test)]
mod report_tests {
    use std::fs;
    use std::time::Duration;

    use compress_bench_core::benchmark::{select, Measurement};
    use compress_bench_core::compression::Algorithm;
    use compress_bench_core::config::ReportFormat;
    use compress_bench_core::report::{report_rows, write_report, JsonReport};

    const HEADER: &str = "Algorithm,Original Size (MB),Compressed Size (MB),Compression Ratio,Compression Speed (B/s),Time Taken (seconds)";

    fn results() -> Vec<Measurement> {
        vec![
            Measurement::completed(Algorithm::Lz4, 2 * 1024 * 1024, 1024 * 1024, Duration::from_millis(5)),
            Measurement::completed(Algorithm::Xz, 2 * 1024 * 1024, 256 * 1024, Duration::from_millis(400)),
            Measurement::failed(Algorithm::Zstd, 2 * 1024 * 1024, "boom"),
        ]
    }

    #[test]
    fn csv_has_exact_header_and_two_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compression_results.csv");
        let results = results();
        let outcome = select(&results).unwrap();

        write_report(&outcome, &path, ReportFormat::Csv).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("lz4,2.0,1.0,2.0,"));
        assert!(lines[2].starts_with("xz,2.0,0.25,8.0,"));
    }

    #[test]
    fn same_codec_winning_both_is_written_twice() {
        let results = vec![Measurement::completed(
            Algorithm::Brotli,
            1024,
            128,
            Duration::from_millis(1),
        )];
        let outcome = select(&results).unwrap();
        let rows = report_rows(&outcome);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/results.csv");
        let results = results();
        let outcome = select(&results).unwrap();

        write_report(&outcome, &path, ReportFormat::Csv).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn json_report_carries_both_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let results = results();
        let outcome = select(&results).unwrap();

        write_report(&outcome, &path, ReportFormat::Json).unwrap();

        let report: JsonReport = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report.original_size, 2 * 1024 * 1024);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].algorithm, "lz4");
        assert_eq!(report.rows[1].algorithm, "xz");
    }

    #[test]
    fn unwritable_path_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the report file.
        let results = results();
        let outcome = select(&results).unwrap();
        assert!(write_report(&outcome, dir.path(), ReportFormat::Csv).is_err());
    }
}
