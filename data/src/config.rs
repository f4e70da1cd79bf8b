use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::{card, environment};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path to a JSON catalog file. Falls back to the embedded sample
    /// catalog when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub card: Card,
}

/// Card option overrides; anything unset keeps the template default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Card {
    pub cta_label: Option<String>,
    pub caption: Option<String>,
    pub placeholder_text: Option<String>,
}

impl Card {
    pub fn options(&self) -> card::Options {
        let defaults = card::Options::default();

        card::Options {
            cta_label: self.cta_label.clone().unwrap_or(defaults.cta_label),
            caption: self.caption.clone().unwrap_or(defaults.caption),
            placeholder_text: self
                .placeholder_text
                .clone()
                .unwrap_or(defaults.placeholder_text),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        let dir = environment::config_dir();

        if !dir.exists() {
            fs::create_dir_all(dir.as_path())
                .expect("expected permissions to create config folder");
        }

        dir
    }

    pub fn path() -> PathBuf {
        Self::config_dir().join(environment::CONFIG_FILE_NAME)
    }

    /// A missing config file is not an error; the app runs on defaults.
    pub fn load() -> Result<Self, Error> {
        let path = Self::path();

        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;

        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn parses_card_overrides() {
        let config: Config = toml::from_str(
            r#"
            catalog = "catalog.json"

            [card]
            cta_label = "Shop Now"
            "#,
        )
        .expect("valid config");

        let options = config.card.options();

        assert_eq!(config.catalog, Some(std::path::PathBuf::from("catalog.json")));
        assert_eq!(options.cta_label, "Shop Now");
        assert_eq!(options.caption, "");
        assert_eq!(options.placeholder_text, "No image");
    }

    #[test]
    fn empty_config_keeps_defaults() {
        let config: Config = toml::from_str("").expect("valid config");

        assert!(config.catalog.is_none());
        assert_eq!(config.card.options().cta_label, "Show Now");
    }
}
