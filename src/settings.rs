// src/settings.rs
//! Application settings: `config/settings.toml` when present, env vars win.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_FEED_URL: &str = "https://news.google.com/news/rss";
pub const DEFAULT_POLL_SECS: u64 = 120;
pub const DEFAULT_TRIGGERS_PATH: &str = "config/triggers.txt";
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.toml";

pub const ENV_FEED_URL: &str = "NEWS_FEED_URL";
pub const ENV_POLL_SECS: &str = "NEWS_POLL_SECS";
pub const ENV_TRIGGERS_PATH: &str = "NEWS_TRIGGERS_PATH";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub feed_url: String,
    pub poll_secs: u64,
    pub triggers_path: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            poll_secs: DEFAULT_POLL_SECS,
            triggers_path: PathBuf::from(DEFAULT_TRIGGERS_PATH),
        }
    }
}

impl AppSettings {
    /// Load settings from the default TOML path (if it exists), then apply
    /// env overrides.
    pub fn load_default() -> Result<Self> {
        let base = Path::new(DEFAULT_SETTINGS_PATH);
        let mut settings = if base.exists() {
            Self::from_toml_file(base)?
        } else {
            Self::default()
        };
        settings.apply_env();
        Ok(settings)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing settings from {}", path.display()))
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var(ENV_FEED_URL) {
            if !v.trim().is_empty() {
                self.feed_url = v;
            }
        }
        if let Ok(v) = std::env::var(ENV_POLL_SECS) {
            if let Ok(n) = v.trim().parse() {
                self.poll_secs = n;
            }
        }
        if let Ok(v) = std::env::var(ENV_TRIGGERS_PATH) {
            if !v.trim().is_empty() {
                self.triggers_path = PathBuf::from(v);
            }
        }
    }
}
