use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "API_KEY";
/// Optional override for the Gemini model name.
pub const MODEL_VAR: &str = "JONY_MODEL";

const DEFAULT_MODEL: &str = "gemini-2.5-pro";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no se encontró API_KEY en el entorno: crea .env con API_KEY=tu_api_key")]
    MissingApiKey,
}

/// Optional, non-secret settings read from ~/.config/jony-chat/settings.json.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: String,
    /// Directory the PDF and text exports are written to.
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Directory: ~/.config/jony-chat/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("jony-chat");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("settings.json")
    }

    /// Load from disk, returning defaults if the file is missing or invalid.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => Self::parse(&data).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid settings at {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    fn parse(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub settings: Settings,
}

impl Config {
    /// Load `.env`, the settings file and the environment. Fails if the API key is absent.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {e}");
        }
        Self::from_sources(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(MODEL_VAR).ok(),
            Settings::load(),
        )
    }

    fn from_sources(
        api_key: Option<String>,
        model_override: Option<String>,
        mut settings: Settings,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        if let Some(model) = model_override.map(|m| m.trim().to_string()) {
            if !model.is_empty() {
                settings.model = model;
            }
        }

        Ok(Self { api_key, settings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::from_sources(None, None, Settings::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let result = Config::from_sources(Some("   ".into()), None, Settings::default());
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn model_override_replaces_settings_model() {
        let config = Config::from_sources(
            Some(" secret ".into()),
            Some("gemini-2.5-flash".into()),
            Settings::default(),
        )
        .expect("config");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.settings.model, "gemini-2.5-flash");
    }

    #[test]
    fn empty_model_override_keeps_default() {
        let config = Config::from_sources(Some("k".into()), Some("".into()), Settings::default())
            .expect("config");
        assert_eq!(config.settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let settings = Settings::parse(r#"{ "export_dir": "/tmp/jony" }"#).expect("parse");
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.export_dir, PathBuf::from("/tmp/jony"));
    }
}
