//! Configuration for the observation intake.
//!
//! The intake is configured from a small YAML document. Every field has a
//! default, so an empty mapping (`{}`) yields [`IntakeConfig::default`].
//!
//! ```yaml
//! on_invalid: warn          # skip | warn | reject
//! drop_empty_stacks: false
//! categories:
//!   mobs: true
//!   items: true
//! ```
//!
//! The `MALMOEXT_ON_INVALID` environment variable overrides `on_invalid`.

use std::path::Path;
use std::str::FromStr;

use malmoext_types::EntityCategory;
use serde::Deserialize;

/// Environment variable overriding [`IntakeConfig::on_invalid`].
pub const ON_INVALID_ENV: &str = "MALMOEXT_ON_INVALID";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held a value the field does not accept.
    #[error("invalid value {value:?} for {variable}")]
    InvalidOverride {
        /// The environment variable consulted.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// What the intake does with an observation it cannot turn into an entity.
///
/// Covers unknown names as well as records that fail validation (negative
/// quantities, blank ids, non-finite coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidPolicy {
    /// Drop the observation, logging at debug level.
    Skip,
    /// Drop the observation, logging a warning.
    #[default]
    Warn,
    /// Fail the whole call with an error.
    Reject,
}

impl FromStr for InvalidPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "warn" => Ok(Self::Warn),
            "reject" => Ok(Self::Reject),
            _ => Err(ConfigError::InvalidOverride {
                variable: ON_INVALID_ENV,
                value: s.to_owned(),
            }),
        }
    }
}

/// Which entity categories the intake admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CategoryConfig {
    /// Admit mob entities.
    #[serde(default = "default_true")]
    pub mobs: bool,

    /// Admit item entities.
    #[serde(default = "default_true")]
    pub items: bool,
}

impl CategoryConfig {
    /// Whether entities of `category` are admitted.
    ///
    /// Blocks are never reported as entities by the feed, so they are only
    /// resolved through the grid path and always admitted there.
    pub const fn admits(self, category: EntityCategory) -> bool {
        match category {
            EntityCategory::Mob => self.mobs,
            EntityCategory::Item => self.items,
            EntityCategory::Block => true,
        }
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            mobs: true,
            items: true,
        }
    }
}

/// Top-level intake configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IntakeConfig {
    /// Handling of unknown or invalid observations.
    #[serde(default)]
    pub on_invalid: InvalidPolicy,

    /// Discard item entities whose stack size is 0.
    #[serde(default)]
    pub drop_empty_stacks: bool,

    /// Category filter.
    #[serde(default)]
    pub categories: CategoryConfig,
}

impl IntakeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `MALMOEXT_ON_INVALID` overrides `on_invalid` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] if the override is not a policy name.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] if the override is not a policy name.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse_with(yaml, |name| std::env::var(name).ok())
    }

    /// Parse configuration from a YAML string, taking overrides from
    /// `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] if an override is not a policy name.
    pub fn parse_with(
        yaml: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Apply overrides looked up by variable name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if an override is present but
    /// not a valid value.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(ON_INVALID_ENV) {
            self.on_invalid = value.parse()?;
        }
        Ok(())
    }
}

const fn default_true() -> bool {
    true
}
