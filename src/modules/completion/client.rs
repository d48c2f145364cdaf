use serde::Deserialize;
use tokio::time::Duration;
use tracing::{debug, info};

use crate::config::CompletionConfig;

use super::{CompletionError, CompletionMessage, CompletionRequest, SamplingParams};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
pub(super) struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice; other choices are ignored.
    pub(super) fn first_choice(self) -> Result<String, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(CompletionError::NoChoices)
    }
}

/// Thin client for one model on one endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl CompletionClient {
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
            api_key_env: String::new(),
        })
    }

    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = std::env::var(&config.api_key_env).ok();
        let mut client = Self::new(config.base_url.clone(), config.model.clone(), api_key)?;
        client.api_key_env = config.api_key_env.clone();
        Ok(client)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub fn build_request(&self, messages: &[CompletionMessage], params: &SamplingParams) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: params.top_p,
        }
    }

    /// Sends one request and returns the first choice's text.
    pub async fn complete(
        &self,
        messages: &[CompletionMessage],
        params: &SamplingParams,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CompletionError::MissingApiKey(self.api_key_env.clone()))?;

        let payload = self.build_request(messages, params);
        debug!("Sending {} messages to {}", payload.messages.len(), self.endpoint());

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status: status.as_u16(), body });
        }

        let completion: CompletionResponse = response.json().await?;
        let content = completion.first_choice()?;
        info!("Completion from {} returned {} chars", self.model, content.chars().count());

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::completion::Role;

    fn client() -> CompletionClient {
        CompletionClient::new(
            "https://api.example.test/v1/".to_string(),
            "gpt-3.5-turbo".to_string(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_has_single_slash() {
        assert_eq!(client().endpoint(), "https://api.example.test/v1/chat/completions");
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![
            CompletionMessage::system("Übung 1"),
            CompletionMessage::assistant("Hallo Welt"),
            CompletionMessage::user("Hallo"),
        ];
        let params = SamplingParams { temperature: 0.7, max_tokens: 200, top_p: 1.0 };

        let body = serde_json::to_value(client().build_request(&messages, &params)).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 200);
        assert_eq!(body["top_p"], 1.0);
        assert_eq!(body["messages"].as_array().unwrap().len(), 3);
        assert_eq!(body["messages"][1]["role"], "assistant");
        assert_eq!(messages[2].role, Role::User);
    }

    #[test]
    fn test_first_choice_is_returned() {
        let raw = r#"{"choices":[
            {"index":0,"message":{"role":"assistant","content":"erste"}},
            {"index":1,"message":{"role":"assistant","content":"zweite"}}
        ]}"#;
        let response: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_choice().unwrap(), "erste");
    }

    #[test]
    fn test_first_choice_keeps_umlauts() {
        let raw = r#"{"choices":[{"message":{"content":"Grüße"}}]}"#;
        let response: CompletionResponse = serde_json::from_str(raw).unwrap();

        let content = response.first_choice().unwrap();
        assert_eq!(content, "Grüße");
        assert_eq!(content.chars().count(), 5);
        assert_ne!(content.len(), content.chars().count());
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let response: CompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(response.first_choice(), Err(CompletionError::NoChoices)));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let result = client()
            .complete(&[CompletionMessage::user("hi")], &SamplingParams::default())
            .await;
        assert!(matches!(result, Err(CompletionError::MissingApiKey(_))));
    }
}
