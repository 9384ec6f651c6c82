use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails fast if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub sendgrid_api_key: String,
    pub from_email: String,
    pub admin_email: String,
    /// Public base URL of this service, used when building resume retrieval
    /// links for notification emails and spreadsheet exports.
    pub public_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            mongo_uri: require_env("MONGO_URI")?,
            sendgrid_api_key: require_env("SENDGRID_API_KEY")?,
            from_email: require_env("FROM_EMAIL")?,
            admin_email: require_env("ADMIN_EMAIL")?,
            public_base_url: require_env("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
