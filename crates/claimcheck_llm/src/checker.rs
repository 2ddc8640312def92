//! FactChecker: the one call the session loop makes. Infallible by design;
//! transport and API failures come back as an Error-kind record.

use claimcheck_core::FactCheckResult;
use tracing::warn;

use crate::client::CompletionClient;
use crate::parse::interpret;
use crate::prompt::{build_user_prompt, FACT_CHECK_SYSTEM};
use crate::types::CompletionRequest;

pub struct FactChecker<C> {
    client: C,
}

impl<C: CompletionClient> FactChecker<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Check a single claim: build the two-message exchange, call the
    /// completion endpoint once, interpret whatever comes back.
    pub async fn check(&self, claim: &str) -> FactCheckResult {
        let request = CompletionRequest::new(FACT_CHECK_SYSTEM, build_user_prompt(claim));
        match self.client.complete(request).await {
            Ok(raw) => interpret(&raw),
            Err(error) => {
                warn!(%error, "completion call failed");
                FactCheckResult::new(
                    "Error",
                    format!("An error occurred: {error}"),
                    "Unable to complete fact-checking due to an error.",
                )
            }
        }
    }
}
