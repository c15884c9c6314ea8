//! Runtime configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored via dotenvy; real
//! environment variables take precedence.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the portfolio backend
    pub api_base: String,
    /// Name stamped on approvals and audits issued from this session
    pub reviewer: String,
    /// Run against the in-memory fixture service instead of the backend
    pub use_fixtures: bool,
    /// Path of the log file
    pub log_path: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base = env::var("COINLENS_API_BASE")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let reviewer =
            env::var("COINLENS_REVIEWER").unwrap_or_else(|_| "operator".to_string());
        let use_fixtures = env::var("COINLENS_FIXTURES")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let log_path =
            env::var("COINLENS_LOG").unwrap_or_else(|_| "coinlens.log".to_string());

        Self {
            api_base,
            reviewer,
            use_fixtures,
            log_path,
        }
    }
}
