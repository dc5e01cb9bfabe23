use anyhow::{Context, Result};
use coach_core::Tone;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_BASE_URL;

const APP_NAME: &str = "objection-coach";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    /// Credential for the completion API. `OPENAI_API_KEY` takes precedence.
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    /// Model used when none is given on the command line.
    pub model: String,
    /// Tone used when none is given on the command line.
    pub tone: Tone,
    /// Whether free-text objections may be sent to the AI fallback.
    pub ai_fallback_enabled: bool,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            tone: Tone::default(),
            ai_fallback_enabled: true,
        }
    }
}

impl std::fmt::Debug for CoachConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachConfig")
            .field("api_key", &self.credential().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("tone", &self.tone)
            .field("ai_fallback_enabled", &self.ai_fallback_enabled)
            .finish()
    }
}

impl CoachConfig {
    /// Load configuration, then apply environment overrides.
    ///
    /// An explicit `path` must exist and parse. The default location is
    /// optional: if it is missing or broken the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::try_load(path)?,
            None => match get_config_path().and_then(|p| Self::try_load_optional(&p)) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to load config, using defaults: {:#}", e);
                    Self::default()
                }
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    fn try_load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::try_load(path)
    }

    /// Override file values from environment variables.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = var("OPENAI_BASE_URL").filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(model) = var("OBJECTION_COACH_MODEL").filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        if let Some(flag) = var("OBJECTION_COACH_AI") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "off" | "no" => self.ai_fallback_enabled = false,
                "1" | "true" | "on" | "yes" => self.ai_fallback_enabled = true,
                other => tracing::warn!("Ignoring OBJECTION_COACH_AI={}", other),
            }
        }
    }

    /// The API key, if one is set and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Save the current configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Default config location: `<config dir>/objection-coach/config.json`.
pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
