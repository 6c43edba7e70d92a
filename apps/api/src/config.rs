use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The upstream credentials are optional on purpose: a deployment without
/// them still serves every static-table endpoint, and only the proxy
/// endpoints report "not configured".
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// GeoNames account used by the Arabic city lookup proxy.
    pub geonames_user: Option<String>,
    /// Credential for the resume-translation LLM proxy.
    pub openai_api_key: Option<String>,
    /// Maximum items returned by any list endpoint. One value per
    /// deployment, never per-request.
    pub result_cap: usize,
    pub rust_log: String,
}

pub const DEFAULT_RESULT_CAP: usize = 1000;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            geonames_user: optional_env("GEONAMES_USER"),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            result_cap: match std::env::var("RESULT_CAP") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("RESULT_CAP must be a positive integer")?,
                Err(_) => DEFAULT_RESULT_CAP,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating empty/whitespace values as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
