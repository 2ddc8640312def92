//! claimcheck_llm - completion client, prompt builder, response interpreter.

mod checker;
mod client;
mod parse;
mod perplexity;
mod prompt;
mod sanitize;
mod types;

pub use checker::FactChecker;
pub use client::{ClientError, CompletionClient};
pub use parse::interpret;
pub use perplexity::PerplexityClient;
pub use prompt::{build_user_prompt, FACT_CHECK_SYSTEM};
pub use sanitize::clean;
pub use types::CompletionRequest;
