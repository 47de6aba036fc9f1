use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mailtriage")]
#[command(
    author,
    version,
    about = "Classify inbound email as Produtivo or Improdutivo and suggest a reply"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MAILTRIAGE_CONFIG", default_value = "mailtriage.yaml")]
    pub config: PathBuf,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true, env = "MAILTRIAGE_VERBOSE")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "MAILTRIAGE_LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify email text with the local lexical scorer
    Classify {
        #[command(flatten)]
        input: InputArgs,

        /// Include the score breakdown in the output
        #[arg(short, long)]
        explain: bool,
    },

    /// Recover a classification from raw language-model output
    Normalize {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the chat messages to send to a language model
    Prompt {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the effective configuration and weight table
    Diag,
}

/// Where to read the text from: argument, file, or stdin
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to process (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
