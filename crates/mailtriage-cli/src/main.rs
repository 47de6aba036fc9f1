//! MailTriage CLI
//!
//! Classifies inbound email with the local lexical scorer, or repairs the
//! raw answer of a language model, and prints the result as JSON.

use anyhow::Result;
use clap::Parser;
use mailtriage_cli::{execute, AppConfig, Cli};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.log_json);

    // Load configuration
    let config = AppConfig::load(&cli.config, &cli)?;
    info!(
        threshold = config.classifiers.scoring.threshold,
        max_input_bytes = config.max_input_bytes,
        "configuration loaded"
    );

    let output = execute(&cli.command, &config)?;
    println!("{output}");

    Ok(())
}

/// Initialize tracing/logging on stderr so stdout stays machine-readable
fn init_tracing(verbose: bool, json: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("mailtriage=debug,mailtriage_cli=debug,mailtriage_classifiers=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("mailtriage=info,mailtriage_cli=info,mailtriage_classifiers=warn"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
