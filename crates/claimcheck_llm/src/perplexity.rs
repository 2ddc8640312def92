//! Perplexity chat-completions client (OpenAI-compatible wire format).

use std::time::Duration;

use async_trait::async_trait;
use claimcheck_core::Settings;
use serde::Deserialize;
use tokio::time::timeout;

use crate::client::{ClientError, CompletionClient};
use crate::types::CompletionRequest;

pub struct PerplexityClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl PerplexityClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn chat(&self, request: &CompletionRequest) -> Result<String, ClientError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_prompt }
            ],
            "max_tokens": request.max_tokens
        });

        tracing::debug!(model = %self.model, url = %url, "sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(ClientError::EmptyResponse)
    }
}

#[async_trait]
impl CompletionClient for PerplexityClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ClientError> {
        let limit = Duration::from_secs(request.timeout_secs);
        match timeout(limit, self.chat(&request)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout {
                secs: request.timeout_secs,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> PerplexityClient {
        let settings = Settings::new("test-key").with_base_url(server.url());
        PerplexityClient::new(&settings)
    }

    fn request() -> CompletionRequest {
        CompletionRequest::new("system", "user")
    }

    #[tokio::test]
    async fn returns_assistant_content() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"content":"VERDICT: True"}}]}"#)
            .create_async()
            .await;

        let content = client_for(&server).complete(request()).await.unwrap();
        assert_eq!(content, "VERDICT: True");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let err = client_for(&server).complete(request()).await.unwrap_err();
        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status, 500);
                assert!(body.contains("upstream unavailable"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_is_empty_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let err = client_for(&server).complete(request()).await.unwrap_err();
        assert!(matches!(err, ClientError::EmptyResponse));
    }
}
