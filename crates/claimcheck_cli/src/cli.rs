//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Interactive fact-checking assistant backed by a completion API
#[derive(Parser)]
#[command(name = "claimcheck", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Model to use (overrides PERPLEXITY_MODEL)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// API base URL (overrides PERPLEXITY_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory for saved results
    #[arg(long, global = true, default_value = "fact_check_results")]
    pub results_dir: PathBuf,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fact-check a single claim and exit
    Check {
        /// The statement or claim to fact-check
        claim: String,

        /// Save the result to the results directory
        #[arg(long)]
        save: bool,
    },
    /// List previously saved fact-check results
    History,
}
