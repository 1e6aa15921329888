use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub host: String,
    pub port: u16,

    // AI providers. Optional: the simulation endpoints work without them,
    // the generative endpoints report a configuration error when unset.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub stability_api_key: Option<String>,
    pub stability_engine: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if a required var is malformed.
    pub fn from_env() -> Self {
        Self {
            host: env::var("NPCC_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("NPCC_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("NPCC_PORT must be a number"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string()),
            stability_api_key: optional_env("STABILITY_API_KEY"),
            stability_engine: env::var("STABILITY_ENGINE")
                .unwrap_or_else(|_| "stable-diffusion-xl-1024-v1-0".to_string()),
        }
    }
}

/// Treat unset and empty the same: deploys often export empty strings.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
