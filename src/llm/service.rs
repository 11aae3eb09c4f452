use crate::guide::{Extractor, HeaderMatcher, TravelInfo};
use crate::llm::config::{GenerationConfig, LlmConfig, SafetySetting};
use crate::llm::prompts;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Marker prefixed to every failure string returned by [`LlmService::ask`]
pub const ERROR_MARKER: &str = "❗";

/// Errors that can occur in LLM service
#[derive(Debug, Error)]
pub enum LlmServiceError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Content blocked: {0}")]
    Blocked(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("No valid response.")]
    EmptyResponse,
}

/// Body of a generateContent request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: &'a GenerationConfig,
    safety_settings: &'a [SafetySetting],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Gateway to the Gemini text generation API
pub struct LlmService {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LlmService {
    /// Create a new LLM service from configuration
    pub fn new(config: LlmConfig) -> Result<Self, LlmServiceError> {
        config.validate().map_err(LlmServiceError::ConfigError)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Create a service from environment variables
    pub fn from_env() -> Result<Self, LlmServiceError> {
        let config = LlmConfig::from_env().map_err(LlmServiceError::ConfigError)?;
        Self::new(config)
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Send a single prompt and return the generated text.
    ///
    /// One attempt, no retries.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmServiceError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: &self.config.generation,
            safety_settings: &self.config.safety_settings,
        };

        if self.config.debug {
            tracing::debug!(
                "Sending request to Gemini: model={}, prompt_chars={}",
                self.config.model,
                prompt.len()
            );
        }

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(error_for_status(status, &text));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| {
                tracing::debug!("Unparseable Gemini response: {}", e);
                LlmServiceError::EmptyResponse
            })?;

        let content = interpret_response(parsed)?;

        if self.config.debug {
            tracing::debug!("Received response: {} chars", content.len());
        }

        Ok(content)
    }

    /// Like [`generate`](Self::generate), but every failure becomes a
    /// display string starting with [`ERROR_MARKER`].
    pub async fn ask(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Gemini request failed: {}", e);
                failure_message(&e)
            }
        }
    }

    /// Three-sentence summary of a city
    pub async fn describe_city(&self, city: &str) -> String {
        self.ask(&prompts::city_description_prompt(city)).await
    }

    /// Four-category listing for a city, parsed with the given extractor.
    ///
    /// A failed request yields four empty sections.
    pub async fn travel_info<M: HeaderMatcher>(
        &self,
        city: &str,
        extractor: &Extractor<M>,
    ) -> TravelInfo {
        let raw = self.ask(&prompts::travel_info_prompt(city)).await;
        extractor.extract(&raw)
    }
}

/// Render an error the way it is shown in place of content
pub fn failure_message(error: &LlmServiceError) -> String {
    match error {
        LlmServiceError::EmptyResponse => format!("{} No valid response.", ERROR_MARKER),
        other => format!("{} Error: {}", ERROR_MARKER, other),
    }
}

/// Whether a gateway reply is a failure string rather than model output
pub fn is_failure(reply: &str) -> bool {
    reply.starts_with(ERROR_MARKER)
}

fn error_for_status(status: StatusCode, body: &str) -> LlmServiceError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmServiceError::AuthError(message),
        StatusCode::TOO_MANY_REQUESTS => LlmServiceError::RateLimitExceeded,
        _ => LlmServiceError::ApiError {
            status: status.as_u16(),
            message,
        },
    }
}

fn interpret_response(response: GenerateContentResponse) -> Result<String, LlmServiceError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(LlmServiceError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(LlmServiceError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_default();
        let blocked = matches!(reason.as_str(), "SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT");
        return Err(if blocked {
            LlmServiceError::Blocked(reason)
        } else {
            LlmServiceError::EmptyResponse
        });
    }

    Ok(text)
}
