//! Subcommand execution
//!
//! Every command renders a JSON document; `main` prints it to stdout.

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::input::read_input;
use mailtriage_classifiers::{
    build_messages, Classifier, ClassificationResult, ResponseNormalizer, ScoreContext,
    ScoreWeights,
};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Serialize)]
struct ExplainedResult<'a> {
    #[serde(flatten)]
    result: &'a ClassificationResult,
    score: ScoreReport<'a>,
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    total: i32,
    threshold: i32,
    #[serde(flatten)]
    context: &'a ScoreContext,
}

#[derive(Serialize)]
struct Diagnostics<'a> {
    version: &'static str,
    classifiers: Vec<String>,
    weights: &'a ScoreWeights,
    max_input_bytes: usize,
    pretty: bool,
}

/// Run one command and return its JSON output
pub fn execute(command: &Commands, config: &AppConfig) -> anyhow::Result<String> {
    let output = match command {
        Commands::Classify { input, explain } => {
            let text = read_input(input, config.max_input_bytes)?;
            let classifier = config.classifiers.build_classifier()?;

            if *explain {
                let (result, context) = classifier.explain(&text);
                let report = ExplainedResult {
                    result: &result,
                    score: ScoreReport {
                        total: context.total(classifier.weights()),
                        threshold: classifier.weights().threshold,
                        context: &context,
                    },
                };
                render(&report, config.pretty)?
            } else {
                render(&run_classifier(&classifier, &text), config.pretty)?
            }
        }

        Commands::Normalize { input } => {
            let raw = read_input(input, config.max_input_bytes)?;
            render(&run_classifier(&ResponseNormalizer::new(), &raw), config.pretty)?
        }

        Commands::Prompt { input } => {
            let text = read_input(input, config.max_input_bytes)?;
            render(&build_messages(&text), config.pretty)?
        }

        Commands::Diag => {
            let available: Vec<Box<dyn Classifier>> = vec![
                Box::new(config.classifiers.build_classifier()?),
                Box::new(ResponseNormalizer::new()),
            ];
            let diagnostics = Diagnostics {
                version: env!("CARGO_PKG_VERSION"),
                classifiers: available.iter().map(|c| c.name().to_string()).collect(),
                weights: &config.classifiers.scoring,
                max_input_bytes: config.max_input_bytes,
                pretty: config.pretty,
            };
            render(&diagnostics, config.pretty)?
        }
    };

    Ok(output)
}

fn run_classifier(classifier: &dyn Classifier, text: &str) -> ClassificationResult {
    let start = Instant::now();
    let result = classifier.classify(text);

    info!(
        classifier = classifier.name(),
        category = %result.category,
        latency_us = start.elapsed().as_micros() as u64,
        "email classified"
    );
    result
}

fn render<T: Serialize>(value: &T, pretty: bool) -> mailtriage_core::Result<String> {
    debug!(pretty, "rendering output");
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailtriage_core::Error;
    use std::collections::BTreeMap;

    #[test]
    fn test_render_compact_and_pretty() {
        let result = ClassificationResult::productive("ok");

        let compact = render(&result, false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.contains("\"categoria\":\"Produtivo\""));

        let pretty = render(&result, true).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_render_unserializable_value() {
        // JSON object keys must be strings
        let value = BTreeMap::from([(vec![1u8], 1)]);

        assert!(matches!(render(&value, false), Err(Error::Serialization(_))));
        assert!(matches!(render(&value, true), Err(Error::Serialization(_))));
    }
}
