use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context, Result};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const SETTINGS_FILE: &str = "homework.toml";

/// Environment overrides, applied in order; the last non-empty one wins.
const API_BASE_URL_ENV_VARS: [&str; 2] = ["HOMEWORK_API_URL", "APP__API_BASE_URL"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

impl ClientSettings {
    /// Applies a command-line override on top of file and env settings.
    pub fn with_server_url(mut self, server_url: Option<&str>) -> Result<Self> {
        if let Some(url) = server_url {
            self.api_base_url = normalize_base_url(url)?;
        }
        Ok(self)
    }
}

pub fn load_settings() -> Result<ClientSettings> {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        let file_cfg = toml::from_str::<HashMap<String, String>>(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        if let Some(v) = file_cfg.get("api_base_url") {
            settings.api_base_url = v.clone();
        }
    }

    for name in API_BASE_URL_ENV_VARS {
        if let Some(v) = env(name).filter(|v| !v.trim().is_empty()) {
            settings.api_base_url = v;
        }
    }

    settings.api_base_url = normalize_base_url(&settings.api_base_url)?;
    Ok(settings)
}

pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        bail!("server url must start with http:// or https://: {raw:?}");
    }
    Url::parse(trimmed).with_context(|| format!("invalid server url {raw:?}"))?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
