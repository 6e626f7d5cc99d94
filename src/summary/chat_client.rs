use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SummarizerError};
use crate::summary::config::ProviderConfig;
use crate::summary::decode::truncate_for_error;
use crate::summary::provider::CompletionProvider;
use crate::summary::request::{ChatMessage, SummaryRequest};

/// Token usage returned by chat-completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// Parsed response from one completion call.
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    pub content: String,
    pub finish_reason: Option<String>,
    pub usage: Option<ChatUsage>,
}

/// Chat-completions client for OpenAI-compatible providers (Groq, OpenAI, local servers).
pub struct ChatClient {
    config: ProviderConfig,
    http: reqwest::Client,
}

impl ChatClient {
    /// Builds the HTTP client. A missing API key is only a warning here; the
    /// provider rejects the first request instead.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        config.validate()?;

        if config.api_key.is_none() {
            warn!(
                "{} environment variable not set; requests to {} will likely be rejected",
                config.api_key_env, config.provider
            );
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                SummarizerError::Initialization(format!("failed to build http client: {}", e))
            })?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatCompletion> {
        if messages.is_empty() {
            return Err(SummarizerError::Provider(
                "completion requires at least one message".to_string(),
            ));
        }

        let url = self.chat_completions_url();
        let payload = ChatCompletionsRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            temperature: Some(self.config.temperature),
            response_format: Some(ResponseFormat {
                kind: "json_object".to_string(),
            }),
            stream: Some(false),
        };

        let mut request = self.http.post(&url).json(&payload);
        if let Some(api_key) = self.config.api_key.as_ref() {
            request = request.bearer_auth(api_key);
        }
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SummarizerError::Provider(format!(
                    "request timed out after {:?} (provider={}, model={})",
                    self.config.timeout, self.config.provider, self.config.model
                ))
            } else {
                SummarizerError::Provider(format!(
                    "request failed (provider={}, model={}): {}",
                    self.config.provider, self.config.model, e
                ))
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SummarizerError::Provider(format!("failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            return Err(SummarizerError::Provider(format!(
                "{} returned HTTP {}: {}",
                self.config.provider,
                status,
                truncate_for_error(&body)
            )));
        }

        let parsed: ChatCompletionsResponse = serde_json::from_str(&body).map_err(|e| {
            SummarizerError::Provider(format!(
                "invalid JSON envelope from {}: {} (body={})",
                self.config.provider,
                e,
                truncate_for_error(&body)
            ))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SummarizerError::Provider("response had no choices".to_string()))?;

        let content = choice
            .message
            .content
            .and_then(ChatContent::into_text)
            .ok_or_else(|| SummarizerError::Provider("response had empty message content".to_string()))?;

        if let Some(usage) = parsed.usage.as_ref() {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "completion received"
            );
        }

        Ok(ChatCompletion {
            content,
            finish_reason: choice.finish_reason,
            usage: parsed.usage,
        })
    }

    fn chat_completions_url(&self) -> String {
        let endpoint = self.config.endpoint.trim().trim_end_matches('/');
        if endpoint.ends_with("/chat/completions") {
            endpoint.to_string()
        } else if endpoint.ends_with("/v1") {
            format!("{}/chat/completions", endpoint)
        } else {
            format!("{}/v1/chat/completions", endpoint)
        }
    }
}

impl CompletionProvider for ChatClient {
    async fn complete(&self, request: &SummaryRequest) -> Result<String> {
        let completion = self.chat(&request.messages).await?;
        if completion.finish_reason.as_deref() == Some("length") {
            warn!("completion for `{}` was cut off at the token limit", request.name);
        }
        Ok(completion.content)
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<ChatContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ChatContent {
    Text(String),
    Parts(Vec<ChatContentPart>),
}

impl ChatContent {
    fn into_text(self) -> Option<String> {
        let text = match self {
            ChatContent::Text(text) => text.trim().to_string(),
            ChatContent::Parts(parts) => parts
                .into_iter()
                .filter_map(|p| p.text)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChatContentPart {
    #[serde(default)]
    text: Option<String>,
}
