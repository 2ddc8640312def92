//! `claimcheck check` - one-shot fact check.

use std::path::Path;

use anyhow::Result;
use claimcheck_core::Settings;
use claimcheck_llm::{FactChecker, PerplexityClient};

use crate::commands::run_check;
use crate::output;
use crate::storage;

pub async fn handle(claim: &str, save: bool, results_dir: &Path, settings: Settings) -> Result<()> {
    let checker = FactChecker::new(PerplexityClient::new(&settings));
    let result = run_check(&checker, claim).await;
    output::display_result(claim, &result);

    if save {
        let path = storage::save_result(claim, &result, results_dir, None)?;
        output::success(&format!("Result saved to {}", path.display()));
    }
    Ok(())
}
