//! Venue configuration.
//!
//! The abbreviation table and the precedence list are compiled in, and a TOML
//! file can replace either of them at startup:
//!
//! ```toml
//! precedence = ["TPAMI", "ACL", "CVPR"]
//!
//! [[venue]]
//! pattern = "Empirical Methods"
//! code = "EMNLP"
//! ```
//!
//! Absent keys keep the built-in value; present keys replace it entirely.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ordering::ConferenceOrder;
use crate::venue::{VenueRule, VenueTable};

/// Errors that can occur when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Venue rule #{index} has an empty pattern or code")]
    EmptyRule { index: usize },
}

/// Raw file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    precedence: Option<Vec<String>>,
    #[serde(default, rename = "venue")]
    venues: Option<Vec<VenueRule>>,
}

/// The tables driving abbreviation and ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub venues: VenueTable,
    pub precedence: ConferenceOrder,
}

/// Serializable view of a [`Config`], used by `paper-list venues --json`.
#[derive(Debug, Serialize)]
pub struct ConfigSummary<'a> {
    pub venues: &'a [VenueRule],
    pub precedence: &'a [String],
}

impl Config {
    /// Loads a configuration file, layering it over the built-in tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// contains a rule with an empty pattern or code.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(rules) = file.venues {
            // An empty pattern would match every venue
            if let Some(index) = rules
                .iter()
                .position(|r| r.pattern.trim().is_empty() || r.code.trim().is_empty())
            {
                return Err(ConfigError::EmptyRule { index: index + 1 });
            }
            config.venues = VenueTable::new(rules);
        }

        if let Some(codes) = file.precedence {
            config.precedence = ConferenceOrder::new(codes);
        }

        Ok(config)
    }

    pub fn summary(&self) -> ConfigSummary<'_> {
        ConfigSummary {
            venues: self.venues.rules(),
            precedence: self.precedence.codes(),
        }
    }
}
