use anyhow::{Context as _, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::i18n::Language;

/// Free-tier key used when no key has been configured.
/// Override with `snowday configure`.
const BUNDLED_API_KEY: &str = "4851471e5c74a0e9841bdc3198b3d5ef";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key; the bundled free-tier key applies when unset.
    pub api_key: Option<String>,

    /// Default language tag, e.g. "en" or "hi".
    pub language: Option<String>,
}

impl Config {
    /// Effective API key: the configured one, or the bundled free-tier key.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or(BUNDLED_API_KEY)
    }

    pub fn is_api_key_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Default language as a strongly-typed value; English when unset.
    pub fn language(&self) -> Result<Language> {
        match self.language.as_deref() {
            None => Ok(Language::default()),
            Some(tag) => Language::try_from(tag).map_err(|e| {
                e.context(format!(
                    "Invalid language '{tag}' in config file.\n\
                     Hint: run `snowday configure` to pick a supported language."
                ))
            }),
        }
    }

    pub fn set_language(&mut self, lang: Language) {
        self.language = Some(lang.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "snowday", "snowday-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_key_falls_back_to_the_bundled_one() {
        let cfg = Config::default();

        assert!(!cfg.is_api_key_configured());
        assert_eq!(cfg.api_key(), BUNDLED_API_KEY);
    }

    #[test]
    fn configured_key_wins() {
        let mut cfg = Config::default();
        cfg.set_api_key("MY_KEY".into());

        assert!(cfg.is_api_key_configured());
        assert_eq!(cfg.api_key(), "MY_KEY");
    }

    #[test]
    fn language_defaults_to_english() {
        let cfg = Config::default();
        assert_eq!(cfg.language().expect("default language"), Language::English);
    }

    #[test]
    fn set_language_roundtrips() {
        let mut cfg = Config::default();
        cfg.set_language(Language::Hindi);

        assert_eq!(cfg.language().expect("language"), Language::Hindi);
        assert_eq!(cfg.language.as_deref(), Some("hi"));
    }

    #[test]
    fn invalid_language_errors_with_hint() {
        let cfg = Config { api_key: None, language: Some("xx".into()) };

        let err = cfg.language().unwrap_err();
        assert!(err.to_string().contains("Hint: run `snowday configure`"));
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("MY_KEY".into());
        cfg.set_language(Language::Hindi);

        let toml = toml::to_string_pretty(&cfg).expect("serialize");
        let back: Config = toml::from_str(&toml).expect("parse");

        assert_eq!(back.api_key(), "MY_KEY");
        assert_eq!(back.language().expect("language"), Language::Hindi);
    }
}
