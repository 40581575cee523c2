pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-4o-2024-08-06";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const CREDENTIAL_FILE: &str = "vibesort.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Process-level configuration. The credential comes from `OPENAI_API_KEY`,
/// falling back to the local credential file; absence is reported at call
/// time, not here, so a missing key still allows constructing the config.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl EnvConfig {
    pub fn load() -> Result<Self> {
        let api_key = match std::env::var("OPENAI_API_KEY").ok().filter(|s| !s.is_empty()) {
            Some(key) => Some(key),
            None => file::load_credential_file(CREDENTIAL_FILE)?,
        };

        let base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout_secs = std::env::var("OPENAI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url,
            request_timeout_secs,
        })
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("model", &self.model)?;
        Ok(())
    }
}

impl ConfigProvider for EnvConfig {
    fn credential(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "vibesort")]
#[command(about = "Sort numbers by delegating comparison to a remote language model")]
pub struct CliConfig {
    /// JSON array of numbers to sort, e.g. '[6,2,9,1,4]'
    pub input: String,

    #[arg(long, help = "Override the model identifier")]
    pub model: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
