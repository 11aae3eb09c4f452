use serde::{Deserialize, Serialize};
use std::env;

/// Default Gemini REST endpoint
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Sampling parameters sent with every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Randomness/creativity (0.0-2.0)
    pub temperature: f32,

    /// Nucleus sampling cutoff (0.0-1.0)
    pub top_p: f32,

    /// Number of top candidates considered per token
    pub top_k: u32,

    /// Maximum tokens for the response
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 2048,
        }
    }
}

/// Harm categories with a configurable blocking threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];
}

/// Probability threshold at which content gets blocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// One medium threshold per harm category
pub fn default_safety_settings() -> Vec<SafetySetting> {
    HarmCategory::ALL
        .iter()
        .map(|&category| SafetySetting {
            category,
            threshold: HarmBlockThreshold::BlockMediumAndAbove,
        })
        .collect()
}

/// Configuration for the Gemini service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Gemini API key
    pub api_key: String,

    /// Model to use (e.g., "gemini-1.5-flash")
    pub model: String,

    /// API base URL, overridable for proxies
    pub api_base: String,

    /// Request timeout in seconds; none means wait for the transport
    pub timeout_secs: Option<u64>,

    pub generation: GenerationConfig,

    pub safety_settings: Vec<SafetySetting>,

    /// Enable debug logging
    pub debug: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: None,
            generation: GenerationConfig::default(),
            safety_settings: default_safety_settings(),
            debug: false,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Self::from_env_internal(true)
    }

    #[cfg(test)]
    fn from_env_no_dotenv() -> Result<Self, String> {
        Self::from_env_internal(false)
    }

    fn from_env_internal(load_dotenv: bool) -> Result<Self, String> {
        if load_dotenv {
            let _ = dotenv::dotenv();
        }

        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY not found in environment. Please set it in .env file or environment variables.")?;

        if api_key.trim().is_empty() {
            return Err("GEMINI_API_KEY is empty".to_string());
        }

        let mut config = Self {
            api_key,
            ..Default::default()
        };

        if let Ok(model) = env::var("GEMINI_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }

        if let Ok(api_base) = env::var("GEMINI_API_BASE") {
            if !api_base.trim().is_empty() {
                config.api_base = api_base.trim_end_matches('/').to_string();
            }
        }

        if let Ok(timeout) = env::var("LLM_REQUEST_TIMEOUT") {
            if let Ok(timeout_secs) = timeout.parse::<u64>() {
                config.timeout_secs = Some(timeout_secs).filter(|&s| s > 0);
            }
        }

        if let Ok(debug) = env::var("LLM_DEBUG") {
            config.debug = debug.to_lowercase() == "true" || debug == "1";
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_empty() {
            return Err("API key is empty".to_string());
        }

        if self.model.is_empty() {
            return Err("Model name is empty".to_string());
        }

        let generation = &self.generation;
        if !(0.0..=2.0).contains(&generation.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                generation.temperature
            ));
        }

        if !(0.0..=1.0).contains(&generation.top_p) {
            return Err(format!("Top-p must be between 0.0 and 1.0, got {}", generation.top_p));
        }

        if generation.top_k == 0 {
            return Err("Top-k must be greater than 0".to_string());
        }

        if generation.max_output_tokens == 0 {
            return Err("Max output tokens must be greater than 0".to_string());
        }

        if !self.model.to_lowercase().starts_with("gemini") {
            tracing::warn!("Model '{}' may not be a Gemini model", self.model);
        }

        Ok(())
    }

    /// Full URL of the generateContent endpoint for the configured model
    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();

        assert_eq!(config.api_key, "");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.generation.temperature, 0.9);
        assert_eq!(config.generation.top_p, 1.0);
        assert_eq!(config.generation.top_k, 1);
        assert_eq!(config.generation.max_output_tokens, 2048);
        assert!(!config.debug);
    }

    #[test]
    fn test_default_safety_settings() {
        let settings = default_safety_settings();
        assert_eq!(settings.len(), 4);
        for (setting, category) in settings.iter().zip(HarmCategory::ALL) {
            assert_eq!(setting.category, category);
            assert_eq!(setting.threshold, HarmBlockThreshold::BlockMediumAndAbove);
        }
    }

    #[test]
    fn test_safety_setting_wire_names() {
        let json = serde_json::to_value(&default_safety_settings()[1]).unwrap();
        assert_eq!(json["category"], "HARM_CATEGORY_HATE_SPEECH");
        assert_eq!(json["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn test_generation_config_wire_names() {
        let json = serde_json::to_value(GenerationConfig::default()).unwrap();
        assert_eq!(json["topK"], 1);
        assert_eq!(json["maxOutputTokens"], 2048);
        assert!(json.get("topP").is_some());
    }

    #[test]
    fn test_endpoint() {
        let config = LlmConfig::default();
        assert_eq!(
            config.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_validate_success() {
        let config = LlmConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_api_key() {
        let result = LlmConfig::default().validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("API key is empty"));
    }

    #[test]
    fn test_validate_invalid_generation() {
        let mut config = LlmConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        };

        config.generation.temperature = 2.5;
        assert!(config.validate().unwrap_err().contains("Temperature must be between"));

        config.generation.temperature = 0.9;
        config.generation.top_p = 1.5;
        assert!(config.validate().unwrap_err().contains("Top-p"));

        config.generation.top_p = 1.0;
        config.generation.top_k = 0;
        assert!(config.validate().unwrap_err().contains("Top-k"));

        config.generation.top_k = 1;
        config.generation.max_output_tokens = 0;
        assert!(config.validate().unwrap_err().contains("Max output tokens"));
    }

    fn setup_clean_env() {
        env::remove_var("GEMINI_API_KEY");
        env::remove_var("GEMINI_MODEL");
        env::remove_var("GEMINI_API_BASE");
        env::remove_var("LLM_REQUEST_TIMEOUT");
        env::remove_var("LLM_DEBUG");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_api_key() {
        setup_clean_env();

        let result = LlmConfig::from_env_no_dotenv();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("GEMINI_API_KEY not found"));
    }

    #[test]
    #[serial]
    fn test_from_env_blank_api_key() {
        setup_clean_env();
        env::set_var("GEMINI_API_KEY", "   ");

        let result = LlmConfig::from_env_no_dotenv();
        assert!(result.unwrap_err().contains("GEMINI_API_KEY is empty"));

        setup_clean_env();
    }

    #[test]
    #[serial]
    fn test_from_env_with_api_key() {
        setup_clean_env();
        env::set_var("GEMINI_API_KEY", "test-api-key");

        let config = LlmConfig::from_env_no_dotenv().unwrap();
        assert_eq!(config.api_key, "test-api-key");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.generation, GenerationConfig::default());

        setup_clean_env();
    }

    #[test]
    #[serial]
    fn test_from_env_with_overrides() {
        setup_clean_env();
        env::set_var("GEMINI_API_KEY", "test-key");
        env::set_var("GEMINI_MODEL", "gemini-1.5-pro");
        env::set_var("GEMINI_API_BASE", "http://localhost:8080/");
        env::set_var("LLM_REQUEST_TIMEOUT", "30");
        env::set_var("LLM_DEBUG", "1");

        let config = LlmConfig::from_env_no_dotenv().unwrap();
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.timeout_secs, Some(30));
        assert!(config.debug);

        setup_clean_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        setup_clean_env();
        env::set_var("GEMINI_API_KEY", "test-key");
        env::set_var("LLM_REQUEST_TIMEOUT", "soon");

        let config = LlmConfig::from_env_no_dotenv().unwrap();
        assert_eq!(config.timeout_secs, None);

        env::set_var("LLM_REQUEST_TIMEOUT", "0");
        let config = LlmConfig::from_env_no_dotenv().unwrap();
        assert_eq!(config.timeout_secs, None);

        setup_clean_env();
    }
}
