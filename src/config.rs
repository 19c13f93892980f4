//! Gravatar configuration.
//!
//! The client reads three keys, once, at construction:
//!
//! | Key | Type | Default |
//! |-----|------|---------|
//! | `gravatar.default` | string | required |
//! | `gravatar.size` | positive integer | required |
//! | `gravatar.maxRating` | `g`, `pg`, `r` or `x` | `"g"` |
//!
//! Keys are looked up through [`ConfigSource`], so any key/value store can
//! back the client. The bundled [`ConfigRepository`] holds a TOML table,
//! usually loaded from a `gravatar.toml` file:
//!
//! ```toml
//! [gravatar]
//! default = "identicon"
//! size = 80
//! maxRating = "pg"
//! ```
//!
//! ## Stock Defaults
//!
//! User files are merged on top of the stock defaults, which only supply
//! `maxRating`. `default` and `size` have no fallback: a file that omits them
//! fails when the client is built, rather than silently rendering some other
//! avatar style or size.
//!
//! Unknown keys in the `[gravatar]` table are rejected to catch typos early.

use crate::rating::Rating;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const KEY_DEFAULT: &str = "gravatar.default";
pub const KEY_SIZE: &str = "gravatar.size";
pub const KEY_MAX_RATING: &str = "gravatar.maxRating";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required config key '{0}'")]
    Missing(&'static str),
    #[error("invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Read-only key/value lookup with dotted keys (`gravatar.size`).
///
/// Implementations must be safe for concurrent reads if the client is shared
/// across threads.
pub trait ConfigSource {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&toml::Value>;

    /// Value stored under `key`, or `default` when absent.
    fn get_or<'a>(&'a self, key: &str, default: &'a toml::Value) -> &'a toml::Value {
        self.get(key).unwrap_or(default)
    }
}

/// A TOML table used as a [`ConfigSource`].
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    root: toml::Value,
}

impl ConfigRepository {
    pub fn new(root: toml::Value) -> Self {
        Self { root }
    }

    /// Parse a TOML document, merged on top of the stock defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let overlay: toml::Value = toml::from_str(content)?;
        resolve_repository(stock_defaults_value(), Some(overlay))
    }
}

impl ConfigSource for ConfigRepository {
    fn get(&self, key: &str) -> Option<&toml::Value> {
        key.split('.').try_fold(&self.root, |node, part| node.get(part))
    }
}

/// Shape of a config file. Only used to reject unknown keys and
/// ill-typed values before lookups happen; every field is optional here
/// because required-ness is checked by [`GravatarConfig::from_source`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub gravatar: GravatarSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GravatarSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(rename = "maxRating", skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<String>,
}

/// Validated settings held by the client for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravatarConfig {
    /// Fallback avatar style (`identicon`, `monsterid`, ...) or image URL.
    pub default: String,
    /// Default pixel size. Trusted: never clamped.
    pub size: u32,
    pub max_rating: Rating,
}

impl GravatarConfig {
    /// Read and validate the three Gravatar keys from `source`.
    pub fn from_source<C: ConfigSource>(source: &C) -> Result<Self, ConfigError> {
        let default = source
            .get(KEY_DEFAULT)
            .ok_or(ConfigError::Missing(KEY_DEFAULT))?
            .as_str()
            .ok_or_else(|| invalid(KEY_DEFAULT, "expected a string"))?
            .to_string();

        let size = source
            .get(KEY_SIZE)
            .ok_or(ConfigError::Missing(KEY_SIZE))?
            .as_integer()
            .ok_or_else(|| invalid(KEY_SIZE, "expected an integer"))?;
        let size = u32::try_from(size)
            .map_err(|_| invalid(KEY_SIZE, format!("{size} is out of range")))?;

        let fallback = toml::Value::String(Rating::default().to_string());
        let max_rating = source
            .get_or(KEY_MAX_RATING, &fallback)
            .as_str()
            .ok_or_else(|| invalid(KEY_MAX_RATING, "expected a string"))?
            .parse::<Rating>()
            .map_err(|e| invalid(KEY_MAX_RATING, e.to_string()))?;

        let config = Self {
            default,
            size,
            max_rating,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default.trim().is_empty() {
            return Err(invalid(KEY_DEFAULT, "must not be empty"));
        }
        if self.size == 0 {
            return Err(invalid(KEY_SIZE, "must be a positive integer"));
        }
        Ok(())
    }
}

fn invalid(key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.into(),
    }
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    let stock = ConfigFile {
        gravatar: GravatarSection {
            max_rating: Some(Rating::default().to_string()),
            ..GravatarSection::default()
        },
    };
    toml::Value::try_from(stock).expect("stock config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value and check its shape.
pub fn resolve_repository(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ConfigRepository, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let _: ConfigFile = merged.clone().try_into()?;
    Ok(ConfigRepository::new(merged))
}

/// Load the config file at `path` on top of the stock defaults.
///
/// A missing file is not an error here; the client fails later on the
/// required keys it cannot find.
pub fn load_config(path: &Path) -> Result<ConfigRepository, ConfigError> {
    log::debug!("loading config from {}", path.display());
    let overlay = load_raw_config(path)?;
    if overlay.is_none() {
        log::debug!("{} not found, using stock defaults", path.display());
    }
    resolve_repository(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `gravatar.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gravatar Configuration
# ======================

[gravatar]
# Fallback image served when no avatar was uploaded for the address.
# One of: 404, mp, identicon, monsterid, wavatar, retro, robohash, blank,
# or the URL of a public image.
# Required.
default = "identicon"

# Default avatar size in pixels. Sizes passed per call are clamped to
# 1..=512; this value is used as-is.
# Required.
size = 80

# Highest content rating to serve: g, pg, r or x.
maxRating = "g"
"##
}
