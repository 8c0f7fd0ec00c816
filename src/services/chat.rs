use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the chat-completion provider
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("provider returned no completion")]
    EmptyResponse,
}

/// Chat-completion client for an OpenAI-compatible endpoint (Groq by default).
///
/// One outbound call per ask action: no retries, no partial answers. A
/// failed call is surfaced once with the provider's status and body verbatim.
pub struct ChatClient {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatClient {
    /// Create a new chat client
    pub fn new(base_url: String, api_key: String, model: String, temperature: f32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            temperature,
            client,
        }
    }

    /// Send one system/user prompt pair and return the first completion's
    /// message text.
    pub async fn send(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ChatError> {
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.temperature,
        };

        tracing::debug!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Chat provider returned {}: {}", status, body);
            return Err(ChatError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ChatError::EmptyResponse)?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::ServerGuard) -> ChatClient {
        ChatClient::new(
            server.url(),
            "test-key".to_string(),
            "llama-3.1-8b-instant".to_string(),
            0.0,
        )
    }

    #[tokio::test]
    async fn test_send_returns_first_completion_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_body(
                r#"{"choices":[{"message":{"content":"Bank A charges a $995 UW fee."}}]}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let answer = client.send("system", "question").await.unwrap();

        assert_eq!(answer, "Bank A charges a $995 UW fee.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_surfaces_status_and_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body("rate limit exceeded")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.send("system", "question").await.unwrap_err();

        match err {
            ChatError::ApiError { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limit exceeded");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_rejects_empty_choices() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.send("system", "question").await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyResponse));
    }
}
