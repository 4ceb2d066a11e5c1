//! File-level tests for detector runs
//!
//! These write batch and stream files to a temp directory, run the
//! detector, and read the verdict files back.

use paymo_antifraud::{Detector, DetectorConfig, DetectorError, EvaluationMode, FeedError, ParseError, RunPlan};
use paymo_domain::Feature;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BATCH: &str = "time, id1, id2, amount, message
2016-11-01 17:38:25, 1, 2, 10.00, rent
2016-11-01 17:38:25, 2, 3, 4.50, coffee, bagel
2016-11-01 17:38:25, 3, 4, 12.00, 🍕
2016-11-01 17:38:25, 4, 5, 8.25, tickets
2016-11-01 17:38:25, 20, 21, 1.00, gum
";

const STREAM: &str = "time, id1, id2, amount, message
2016-11-02 09:38:53, 1, 2, 3.00, again
2016-11-02 09:38:53, 1, 3, 3.00, hop
2016-11-02 09:38:53, 2, 5, 3.00, far
2016-11-02 09:38:53, 1, 99, 3.00, stranger
2016-11-02 09:38:53, 99, 1, 3.00, returning
2016-11-02 09:38:53, 5, 20, 3.00, bridge
2016-11-02 09:38:53, 3, 21, 3.00, across
";

fn setup(batch: &str, stream: &str) -> (TempDir, RunPlan) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("batch_payment.txt"), batch).unwrap();
    fs::write(dir.path().join("stream_payment.txt"), stream).unwrap();
    let plan = RunPlan::new(
        dir.path().join("batch_payment.txt"),
        dir.path().join("stream_payment.txt"),
        [
            dir.path().join("output1.txt"),
            dir.path().join("output2.txt"),
            dir.path().join("output3.txt"),
        ],
    );
    (dir, plan)
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn run(mode: EvaluationMode, plan: &RunPlan) -> Detector {
    let mut detector = Detector::new(DetectorConfig {
        mode,
        ..DetectorConfig::default()
    });
    detector.run(plan).unwrap();
    detector
}

#[test]
fn test_isolated_run_writes_three_outputs() {
    let (_dir, plan) = setup(BATCH, STREAM);
    let detector = run(EvaluationMode::Isolated, &plan);

    assert_eq!(
        read_lines(plan.output(Feature::DirectConnection)),
        vec!["trusted", "unverified", "unverified", "unverified", "trusted", "unverified", "unverified"]
    );
    assert_eq!(
        read_lines(plan.output(Feature::WithinTwoDegrees)),
        vec!["trusted", "trusted", "unverified", "unverified", "trusted", "unverified", "unverified"]
    );
    assert_eq!(
        read_lines(plan.output(Feature::WithinFourDegrees)),
        vec!["trusted", "trusted", "trusted", "unverified", "trusted", "unverified", "trusted"]
    );

    let metrics = detector.metrics();
    assert_eq!(metrics.batch.transactions, 5);
    assert_eq!(metrics.batch.users, 7);
    for feature in Feature::ALL {
        assert_eq!(metrics.feature(feature).total(), 7);
    }
}

#[test]
fn test_rerun_reports_one_run() {
    let (_dir, plan) = setup(BATCH, STREAM);
    let mut detector = run(EvaluationMode::SinglePass, &plan);
    let first = detector.metrics().clone();

    detector.run(&plan).unwrap();
    let second = detector.metrics();
    assert_eq!(second.batch, first.batch);
    for feature in Feature::ALL {
        let (a, b) = (first.feature(feature), second.feature(feature));
        assert_eq!(b.total(), 7);
        assert_eq!((b.trusted, b.new_edges, b.final_edges), (a.trusted, a.new_edges, a.final_edges));
    }
}

#[test]
fn test_single_pass_output_is_identical() {
    let (_isolated_dir, isolated_plan) = setup(BATCH, STREAM);
    let (_single_dir, single_plan) = setup(BATCH, STREAM);
    let isolated = run(EvaluationMode::Isolated, &isolated_plan);
    let single = run(EvaluationMode::SinglePass, &single_plan);

    for feature in Feature::ALL {
        assert_eq!(
            read_lines(isolated_plan.output(feature)),
            read_lines(single_plan.output(feature)),
            "{} differs between modes",
            feature
        );
        let (a, b) = (isolated.metrics().feature(feature), single.metrics().feature(feature));
        assert_eq!(a.trusted, b.trusted);
        assert_eq!(a.final_edges, b.final_edges);
    }
}

#[test]
fn test_outputs_are_independent_of_feature_order() {
    // Re-running only feature 3 on a fresh graph gives the same answers as
    // the full run, so earlier features' stream edges do not leak into it.
    let (_dir, plan) = setup(BATCH, STREAM);
    run(EvaluationMode::Isolated, &plan);

    let config = DetectorConfig::default();
    let mut detector = Detector::new(config.clone());
    let mut batch = paymo_antifraud::CsvFeed::open(&plan.batch, &config).unwrap();
    let mut graph = detector.build_graph(&mut batch).unwrap();
    let mut stream = paymo_antifraud::CsvFeed::open(&plan.stream, &config).unwrap();
    let mut verdicts = Vec::new();
    detector
        .evaluate_feature(Feature::WithinFourDegrees, &mut graph, &mut stream, &mut verdicts)
        .unwrap();

    let tokens: Vec<String> = verdicts.iter().map(|v| v.to_string()).collect();
    assert_eq!(tokens, read_lines(plan.output(Feature::WithinFourDegrees)));
}

#[test]
fn test_malformed_stream_line_fails_run() {
    let stream = "time, id1, id2, amount, message\n2016-11-02, 1, 2, 3.00, ok\n2016-11-02, one, 2, 3.00, bad\n";
    let (_dir, plan) = setup(BATCH, stream);

    let mut detector = Detector::default_config();
    let err = detector.run(&plan).unwrap_err();
    match err {
        DetectorError::Feed(FeedError::Parse(ParseError::InvalidUser { line, field, value })) => {
            assert_eq!(line, 3);
            assert_eq!(field, 1);
            assert_eq!(value, "one");
        }
        other => panic!("Expected InvalidUser, got {:?}", other),
    }
}

#[test]
fn test_skip_malformed_keeps_going() {
    let stream = "time, id1, id2, amount, message\n2016-11-02, 1, 2, 3.00, ok\nbroken line\n2016-11-02, 1, 3, 3.00, ok\n";
    let (_dir, plan) = setup(BATCH, stream);

    let mut detector = Detector::new(DetectorConfig {
        skip_malformed: true,
        ..DetectorConfig::default()
    });
    detector.run(&plan).unwrap();

    assert_eq!(read_lines(plan.output(Feature::DirectConnection)), vec!["trusted", "unverified"]);
    assert_eq!(detector.metrics().feature(Feature::DirectConnection).skipped_lines, 1);
}

#[test]
fn test_missing_batch_file() {
    let (dir, mut plan) = setup(BATCH, STREAM);
    plan.batch = dir.path().join("nope.txt");

    let err = Detector::default_config().run(&plan).unwrap_err();
    match err {
        DetectorError::Open { path, .. } => assert!(path.ends_with("nope.txt")),
        other => panic!("Expected Open error, got {:?}", other),
    }
}

#[test]
fn test_invalid_config_rejected_before_io() {
    let (_dir, plan) = setup(BATCH, STREAM);
    let mut detector = Detector::new(DetectorConfig {
        source_field: 2,
        ..DetectorConfig::default()
    });
    assert!(matches!(detector.run(&plan), Err(DetectorError::Config(_))));
    assert!(!plan.output(Feature::DirectConnection).exists());
}

#[test]
fn test_header_only_stream_writes_empty_outputs() {
    let (_dir, plan) = setup(BATCH, "time, id1, id2, amount, message\n");
    run(EvaluationMode::SinglePass, &plan);
    for feature in Feature::ALL {
        assert!(read_lines(plan.output(feature)).is_empty());
    }
}
