//! claimcheck - entry point for the fact-checking assistant.

mod cli;
mod commands;
mod output;
mod storage;

use anyhow::Result;
use clap::Parser;
use claimcheck_core::{settings::API_KEY_ENV, Settings};

use crate::cli::Cli;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::from_env()?;
    if let Some(model) = &cli.model {
        settings.model = model.clone();
    }
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    Ok(settings)
}

#[tokio::main]
async fn main() {
    // Load .env from the current directory before anything reads the env.
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    output::init(cli.output);

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            output::error(&error.to_string());
            output::dim(&format!(
                "Set {API_KEY_ENV} in your environment or a .env file."
            ));
            std::process::exit(1);
        }
    };

    if let Err(error) = commands::handle(cli, settings).await {
        output::error(&error.to_string());
        std::process::exit(1);
    }
}
