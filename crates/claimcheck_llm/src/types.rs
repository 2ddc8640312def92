//! Request types for completion calls.

/// A single chat-completion exchange: fixed system instruction plus the
/// user message embedding the claim. One attempt per request, no retries.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl CompletionRequest {
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            max_tokens: 1024,
            timeout_secs: 60,
        }
    }
}
