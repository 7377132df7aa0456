//! Turns parsed RAS events into a sparse training file for the SVM trainer and,
//! given the predictor's score file, reports how well the scores match the labels.
//!
//! Usage: `hpc-failure-predict <events.json> [scores.txt]`

use hpc_failure_predict::{
    config::{PredictorConfig, StrategyKind},
    logging::{RunSummary, StructuredLogger},
    strategy::{Strategy, WindowStrategy},
    training::{evaluate, parse_scores, scores_to_labels},
    LogEvent,
};
use std::path::PathBuf;
use tracing::{error, info};

fn strategy_name(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::EventLevel => "event_level",
        StrategyKind::IbmPaper => "ibm_paper",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("FAILPRED_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let config = PredictorConfig::load(&config_path)?;

    StructuredLogger::init(config.log.json, &config.log.level);

    let mut args = std::env::args().skip(1);
    let Some(events_path) = args.next().map(PathBuf::from) else {
        error!("usage: hpc-failure-predict <events.json> [scores.txt]");
        std::process::exit(2);
    };
    let scores_path = args.next().map(PathBuf::from);

    let strategy = Strategy::new(config.strategy.clone())?;
    info!(events = %events_path.display(), strategy = strategy_name(strategy.kind()), "starting");

    let events: Vec<LogEvent> = serde_json::from_str(&std::fs::read_to_string(&events_path)?)?;
    let examples = strategy.training_examples(&events)?;
    let content = strategy.serialize(&examples)?;
    std::fs::write(&config.output.training_file, content)?;
    info!(path = %config.output.training_file.display(), "wrote training file");

    let evaluation = match scores_path {
        Some(path) => {
            let scores = parse_scores(&std::fs::read_to_string(&path)?)?;
            let actual: Vec<bool> = examples.iter().map(|e| e.label).collect();
            Some(evaluate(&actual, &scores_to_labels(&scores))?)
        }
        None => None,
    };

    let training_file = config.output.training_file.display().to_string();
    let summary = RunSummary {
        ts: chrono::Utc::now().to_rfc3339(),
        strategy: strategy_name(strategy.kind()),
        events: events.len(),
        examples: examples.len(),
        positives: examples.iter().filter(|e| e.label).count(),
        training_file: &training_file,
        evaluation,
    };
    StructuredLogger::emit_json(&summary, &mut std::io::stdout())?;
    Ok(())
}
