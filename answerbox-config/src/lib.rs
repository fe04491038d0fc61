//! Environment-backed configuration for the Answerbox service.
//!
//! The whole surface is environment variables; there is no config file. Two
//! secrets are required and the process must refuse to start without them:
//! `SERPAPI_KEY` and `GEMINI_API_KEY`. Everything else has a default.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime configuration for the answer service.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// SerpAPI key used by the Search Resolver. Required.
    pub serpapi_key: String,
    /// Gemini API key used by the Answer Synthesizer. Required.
    pub gemini_api_key: String,

    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Gemini model routed through `generateContent`.
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// WebDriver endpoint the browser session connects to.
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    /// Upper bound on organic search results per question.
    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,
    /// Per-URL page navigation timeout, in seconds.
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,
    /// Comma-separated CORS origin allow-list override.
    #[serde(default)]
    pub allowed_origins: Option<String>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".into()
}
fn default_gemini_model() -> String {
    "gemini-2.0-flash".into()
}
fn default_webdriver_url() -> String {
    "http://localhost:9515".into()
}
fn default_max_search_results() -> usize {
    5
}
fn default_page_timeout_secs() -> u64 {
    7
}

/// Origins the client application is served from.
const DEFAULT_ORIGINS: &[&str] = &[
    "https://anand-751.github.io",
    "https://anand-751.github.io/Ai-ChatBot",
    "http://localhost:5173",
];

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Fails with a `ConfigError` naming the missing field when either
    /// required secret is absent, so callers can abort startup with a clear
    /// message.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Resolved CORS allow-list: the override when set, defaults otherwise.
    pub fn origins(&self) -> Vec<String> {
        match &self.allowed_origins {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
