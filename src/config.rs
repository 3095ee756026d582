use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    // Backend API
    pub api_base_url: String,
    pub request_timeout_seconds: u64,

    // Out-of-band status refresh while a load is open
    pub status_poll_interval_ms: u64,

    // Checklist progress (count completed per load, nothing else)
    pub checklist_progress_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        // Backend API
        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;
        Url::parse(&api_base_url).context("API_BASE_URL is not a valid URL")?;
        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let status_poll_interval_ms = env::var("STATUS_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2000); // matches the editor's refresh cadence

        let checklist_progress_path = env::var("CHECKLIST_PROGRESS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".loaddesk-checklist.json"));

        Ok(Settings {
            env,
            api_base_url,
            request_timeout_seconds,
            status_poll_interval_ms,
            checklist_progress_path,
        })
    }
}
