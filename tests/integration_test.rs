//! Integration test: config load, strategy construction, events → training file → evaluation.

use hpc_failure_predict::{
    config::{PredictorConfig, StatisticsBasis, StrategyConfig, StrategyKind},
    logging::{RunSummary, StructuredLogger},
    training::{evaluate, parse_scores, scores_to_labels},
    ConfigurationError, Error, LogEvent, Strategy, WindowStrategy,
};
use std::io::Write;
use std::path::Path;

const EVENTS_JSON: &str = r#"[
    {"ts": "2009-08-31T01:00:00Z", "SEVERITY": "INFO",  "COMPONENT": "KERNEL", "NODE": "R00-M0"},
    {"ts": "2009-08-31T02:00:00Z", "SEVERITY": "ERROR", "COMPONENT": "MC"},
    {"ts": "2009-08-31T04:00:00Z", "SEVERITY": "INFO",  "COMPONENT": "KERNEL"},
    {"ts": "2009-08-31T07:00:00Z", "SEVERITY": "INFO",  "COMPONENT": "MMCS"},
    {"ts": "2009-08-31T09:00:00Z", "SEVERITY": "ERROR", "COMPONENT": "KERNEL"},
    {"ts": "2009-08-31T13:00:00Z", "SEVERITY": "WARN",  "COMPONENT": "BAREMETAL"},
    {"ts": "2009-08-31T13:10:00Z", "SEVERITY": "WARN",  "COMPONENT": "BAREMETAL"},
    {"ts": "2009-08-31T13:20:00Z", "SEVERITY": "WARN",  "COMPONENT": "BAREMETAL"},
    {"ts": "2009-08-31T23:00:00Z", "SEVERITY": "FATAL", "COMPONENT": "KERNEL", "MESSAGE": "node card failure"},
    {"ts": "2009-09-01T03:00:00Z", "SEVERITY": "INFO",  "COMPONENT": "MMCS"},
    {"ts": "2009-09-01T22:00:00Z", "SEVERITY": "INFO",  "COMPONENT": "MMCS"}
]"#;

fn events() -> Vec<LogEvent> {
    serde_json::from_str(EVENTS_JSON).unwrap()
}

#[test]
fn config_load_default() {
    let c = PredictorConfig::load(Path::new("nonexistent.json")).unwrap();
    assert_eq!(c.strategy.kind, StrategyKind::IbmPaper);
    assert_eq!(c.strategy.sub_windows, 5);
    assert_eq!(c.strategy.severities, vec!["INFO", "WARN", "ERROR", "FATAL"]);
    assert_eq!(c.strategy.severity_keyword, "SEVERITY");
    assert!(c.strategy.emit_zero_features);
}

#[test]
fn config_load_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"strategy": {"kind": "event_level", "sub_windows": 6, "window_secs": 86400,
            "statistics_basis": "intervals"}, "log": {"json": false}}"#,
    )
    .unwrap();

    let c = PredictorConfig::load(&path).unwrap();
    assert_eq!(c.strategy.kind, StrategyKind::EventLevel);
    assert_eq!(c.strategy.sub_windows, 6);
    assert_eq!(c.strategy.statistics_basis, StatisticsBasis::Intervals);
    assert_eq!(c.strategy.interval_secs, 3600);
    assert!(!c.log.json);
    assert_eq!(c.log.level, "info");
    assert!(Strategy::new(c.strategy).is_ok());
}

#[test]
fn config_load_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    for body in [
        r#"{"strategy": {"window_secs": "90000"}}"#,
        r#"{"strategy": {"kind": "ibm"}}"#,
        "not json",
    ] {
        let path = dir.path().join("config.json");
        std::fs::write(&path, body).unwrap();
        let err = PredictorConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)), "{body}: {err}");
    }
}

#[test]
fn huge_durations_fail_construction() {
    let err = Strategy::new(StrategyConfig {
        interval_secs: 10_000_000_000_000_000,
        ..StrategyConfig::default()
    })
    .err();
    assert_eq!(err, Some(ConfigurationError::DurationOutOfRange("interval")));

    let err = Strategy::new(StrategyConfig {
        window_secs: u64::MAX,
        ..StrategyConfig::default()
    })
    .err();
    assert_eq!(err, Some(ConfigurationError::DurationOutOfRange("window")));
}

#[test]
fn uneven_intervals_fail_construction() {
    let err = Strategy::new(StrategyConfig {
        interval_secs: 4 * 3600,
        ..StrategyConfig::default()
    })
    .err()
    .unwrap();
    assert_eq!(err, ConfigurationError::UnevenIntervals);
    assert_eq!(
        err.to_string(),
        "Error parsing windowed log data, cannot divide sub-windows into smaller intervals evenly!"
    );
}

#[test]
fn invalid_configs_fail_construction() {
    let cases = [
        (
            StrategyConfig {
                sub_windows: 1,
                ..StrategyConfig::default()
            },
            ConfigurationError::TooFewSubWindows(1),
        ),
        (
            StrategyConfig {
                fatal_severity: "PANIC".to_string(),
                ..StrategyConfig::default()
            },
            ConfigurationError::UnknownFatalSeverity("PANIC".to_string()),
        ),
        (
            StrategyConfig {
                severities: vec!["INFO".to_string(), "INFO".to_string(), "FATAL".to_string()],
                ..StrategyConfig::default()
            },
            ConfigurationError::DuplicateSeverity("INFO".to_string()),
        ),
        (
            StrategyConfig {
                severities: Vec::new(),
                ..StrategyConfig::default()
            },
            ConfigurationError::NoSeverities,
        ),
        (
            StrategyConfig {
                interval_secs: 0,
                ..StrategyConfig::default()
            },
            ConfigurationError::NonPositiveDuration("interval"),
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(Strategy::new(config).err(), Some(expected));
    }
}

#[test]
fn events_deserialize_with_passthrough_fields() {
    let events = events();
    assert_eq!(events.len(), 11);
    assert_eq!(events[0].field("NODE").and_then(|v| v.as_str()), Some("R00-M0"));
    assert_eq!(events[8].field("SEVERITY").and_then(|v| v.as_str()), Some("FATAL"));
}

#[test]
fn events_to_training_file_to_evaluation() {
    let strategy = Strategy::new(StrategyConfig::default()).unwrap();
    let events = events();

    let windows = strategy.segment(&events).unwrap();
    assert_eq!(windows.len(), 2);

    let examples = strategy.training_examples(&events).unwrap();
    assert_eq!(examples.len(), 2);
    assert!(examples[0].label);
    assert!(!examples[1].label);
    assert_eq!(examples[0].summary.as_ref().unwrap().aggregate, vec![3, 3, 2, 0]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("training.svm");
    std::fs::write(&path, strategy.serialize(&examples).unwrap()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let labels: Vec<&str> = written
        .lines()
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(labels, vec!["+1", "-1"]);

    // Scores come back one per line in example order.
    let scores = parse_scores("0.82\n-0.40\n").unwrap();
    let actual: Vec<bool> = examples.iter().map(|e| e.label).collect();
    let eval = evaluate(&actual, &scores_to_labels(&scores)).unwrap();
    assert_eq!(eval.counts.true_positives, 1);
    assert_eq!(eval.counts.true_negatives, 1);
    assert!((eval.percentages.accuracy - 1.0).abs() < 1e-9);
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn summary() -> RunSummary<'static> {
    RunSummary {
        ts: "2009-09-01T01:00:00+00:00".to_string(),
        strategy: "ibm_paper",
        events: 11,
        examples: 2,
        positives: 1,
        training_file: "training.svm",
        evaluation: None,
    }
}

#[test]
fn run_summary_is_one_json_line() {
    let mut out = Vec::new();
    StructuredLogger::emit_json(&summary(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["examples"], 2);
    assert!(v.get("evaluation").is_none());
}

#[test]
fn run_summary_write_failure_is_reported() {
    let err = StructuredLogger::emit_json(&summary(), &mut ClosedPipe).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
}
