use anyhow::{bail, Context, Result};

/// Which completion backend to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Groq,
    Anthropic,
}

impl Provider {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "groq" => Ok(Provider::Groq),
            "anthropic" => Ok(Provider::Anthropic),
            other => bail!("Unknown FREDRICK_PROVIDER '{other}' (expected 'groq' or 'anthropic')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// The selected provider's key must be present at startup; the inbound
/// shared secret is checked per request instead (see `auth`).
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: Provider,
    pub provider_api_key: String,
    /// Shared secret expected in the X-API-Key header. Unset means every
    /// authenticated endpoint reports a server misconfiguration.
    pub api_key: Option<String>,
    /// Model identifier override; adapters fall back to their own default.
    pub model: Option<String>,
    pub org_name: String,
    pub risk_tolerance: String,
    pub primary_market: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider = match std::env::var("FREDRICK_PROVIDER") {
            Ok(v) => Provider::parse(&v)?,
            Err(_) => Provider::Groq,
        };

        let provider_api_key = match provider {
            Provider::Groq => require_env("GROQ_API_KEY")?,
            Provider::Anthropic => require_env("ANTHROPIC_API_KEY")?,
        };

        Ok(Config {
            provider,
            provider_api_key,
            api_key: std::env::var("FREDRICK_API_KEY").ok(),
            model: std::env::var("FREDRICK_MODEL").ok(),
            org_name: env_or("FREDRICK_ORG_NAME", "Southern Shade LLC"),
            risk_tolerance: env_or("FREDRICK_RISK_TOLERANCE", "moderate"),
            primary_market: env_or("FREDRICK_PRIMARY_MARKET", "US_GOV_AND_ENTERPRISE"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
