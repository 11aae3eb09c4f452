pub mod service;
pub mod config;
pub mod prompts;

pub use service::{LlmService, LlmServiceError};
pub use config::LlmConfig;
