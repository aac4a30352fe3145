use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::{Error, Result};

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

pub const BASE_URL_VAR: &str = "RAPID_API_BASE_URL";
pub const API_KEY_VAR: &str = "RAPID_API_KEY";
pub const API_HOST_VAR: &str = "RAPID_API_HOST";

/// Get the base data directory (~/.streamwave/)
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        std::env::var("STREAMWAVE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".streamwave")
            })
    })
}

/// Get the .env file path
pub fn env_file_path() -> PathBuf {
    data_dir().join(".env")
}

/// Load environment variables from the data directory's .env file
pub fn load_env() {
    let env_path = env_file_path();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    } else {
        // Try current directory as fallback
        let _ = dotenvy::dotenv();
    }
}

/// Connection settings for the upstream video-data API.
///
/// Read once at process start and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
}

impl ApiConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_host: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            api_host: api_host.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(Error::ApiKeyMissing(name))
        };

        let base_url = read(BASE_URL_VAR)?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "{} must be an http(s) URL, got {:?}",
                BASE_URL_VAR, base_url
            )));
        }

        Ok(Self::new(base_url, read(API_KEY_VAR)?, read(API_HOST_VAR)?))
    }
}
