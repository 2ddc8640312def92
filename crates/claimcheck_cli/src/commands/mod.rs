//! Command dispatch.

pub mod check;
pub mod history;
pub mod session;

use anyhow::Result;
use claimcheck_core::{FactCheckResult, Settings};
use claimcheck_llm::{CompletionClient, FactChecker};

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli, settings: Settings) -> Result<()> {
    match cli.command {
        Some(Command::Check { claim, save }) => {
            check::handle(&claim, save, &cli.results_dir, settings).await
        }
        Some(Command::History) => history::handle(&cli.results_dir),
        None => session::handle(settings, &cli.results_dir).await,
    }
}

/// Run one check with a progress spinner around the completion call.
pub(crate) async fn run_check<C: CompletionClient>(
    checker: &FactChecker<C>,
    claim: &str,
) -> FactCheckResult {
    let spinner = output::spinner("Fact-checking in progress...");
    let result = checker.check(claim).await;
    spinner.finish_and_clear();
    result
}
