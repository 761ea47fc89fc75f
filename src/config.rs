//! Runtime configuration loaded from fincomu.toml and FINCOMU_* variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure. File values come first, environment
/// variables override them; everything has a working default so a bare
/// checkout runs against local collaborators.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub decode: DecodeConfig,
}

/// Settings for the managed-platform collaborators.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Cloud project the auth provider and document store belong to.
    pub project_id: String,
    /// Local emulator host, when set; takes precedence over the real backend.
    pub emulator_host: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            emulator_host: None,
            request_timeout_secs: 20,
        }
    }
}

/// Decode-layer toggles.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// When true, callers should prefer the strict date decoder over the
    /// lenient default-to-now fallback.
    pub strict_dates: bool,
}

impl Config {
    /// Load configuration from the config file (if present) with environment
    /// overrides applied on top.
    pub fn load() -> Result<Self> {
        crate::load_env();
        let path = Self::config_path();
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(&path).map_err(|err| {
                crate::error::CoreError::Config {
                    message: format!("failed to read {}: {}", path.display(), err),
                }
            })?;
            toml::from_str(&text)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// FINCOMU_CONFIG points at an alternate file; default is ./fincomu.toml.
    fn config_path() -> PathBuf {
        std::env::var("FINCOMU_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("fincomu.toml"))
    }

    fn apply_env(&mut self) {
        if let Ok(project) = std::env::var("FINCOMU_PROJECT_ID") {
            self.backend.project_id = project;
        }
        if let Ok(host) = std::env::var("FINCOMU_EMULATOR_HOST") {
            self.backend.emulator_host = if host.is_empty() { None } else { Some(host) };
        }
        if let Some(secs) = std::env::var("FINCOMU_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.backend.request_timeout_secs = secs;
        }
        if let Ok(strict) = std::env::var("FINCOMU_STRICT_DATES") {
            self.decode.strict_dates = strict == "1" || strict.eq_ignore_ascii_case("true");
        }
    }
}
