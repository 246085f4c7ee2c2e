//! # Checkout Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     GROCER_LINE_ITEMS=5                                                │
//! │     GROCER_VERIFY_AGE=false                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/checkout/checkout.toml (Linux)                           │
//! │     ~/Library/Application Support/com.grocer.checkout/ (macOS)         │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     3 line items, "Gift Receipt", ID checks on, 1–5 lb scale           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Corner Grocer"
//!
//! [checkout]
//! line_items = 3
//! gift_placeholder = "Gift Receipt"
//! verify_age = true
//!
//! [scale]
//! min_lbs = 1
//! max_lbs = 5
//! ```

use grocer_core::validation::validate_weight;
use grocer_core::{Weight, MAX_WEIGHT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Store Settings
// =============================================================================

/// The store printed at the top of each session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Grocer POS".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

// =============================================================================
// Checkout Settings
// =============================================================================

/// How a checkout session behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSettings {
    /// Number of menu prompts per session.
    #[serde(default = "default_line_items")]
    pub line_items: usize,

    /// Printed in place of the total on gift receipts.
    #[serde(default = "default_gift_placeholder")]
    pub gift_placeholder: String,

    /// Ask for a birth date before selling alcohol.
    #[serde(default = "default_true")]
    pub verify_age: bool,
}

fn default_line_items() -> usize {
    3
}

fn default_gift_placeholder() -> String {
    "Gift Receipt".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        CheckoutSettings {
            line_items: default_line_items(),
            gift_placeholder: default_gift_placeholder(),
            verify_age: default_true(),
        }
    }
}

// =============================================================================
// Scale Settings
// =============================================================================

/// Range of the simulated scale, in whole pounds (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSettings {
    #[serde(default = "default_min_lbs")]
    pub min_lbs: u32,

    #[serde(default = "default_max_lbs")]
    pub max_lbs: u32,
}

fn default_min_lbs() -> u32 {
    1
}

fn default_max_lbs() -> u32 {
    5
}

impl Default for ScaleSettings {
    fn default() -> Self {
        ScaleSettings {
            min_lbs: default_min_lbs(),
            max_lbs: default_max_lbs(),
        }
    }
}

// =============================================================================
// Main Checkout Configuration
// =============================================================================

/// Complete checkout configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub checkout: CheckoutSettings,

    #[serde(default)]
    pub scale: ScaleSettings,
}

impl CheckoutConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (checkout.toml), if it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading checkout config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to file as pretty TOML.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<PathBuf> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Checkout config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.checkout.line_items == 0 {
            return Err(ConfigError::Invalid(
                "checkout.line_items must be at least 1".into(),
            ));
        }

        if self.checkout.gift_placeholder.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "checkout.gift_placeholder must not be empty".into(),
            ));
        }

        if self.scale.min_lbs > self.scale.max_lbs {
            return Err(ConfigError::Invalid(format!(
                "scale.min_lbs ({}) is greater than scale.max_lbs ({})",
                self.scale.min_lbs, self.scale.max_lbs
            )));
        }

        let max_reading = Weight::from_pounds(i64::from(self.scale.max_lbs));
        if validate_weight(max_reading).is_err() {
            return Err(ConfigError::Invalid(format!(
                "scale.max_lbs ({}) is above the heaviest accepted reading ({} lbs.)",
                self.scale.max_lbs,
                Weight::from_hundredths(MAX_WEIGHT)
            )));
        }

        Ok(())
    }

    /// Applies `GROCER_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable values are logged
    /// and skipped.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("GROCER_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(raw) = lookup("GROCER_LINE_ITEMS") {
            match raw.parse::<usize>() {
                Ok(n) => {
                    debug!(line_items = n, "Overriding line items from environment");
                    self.checkout.line_items = n;
                }
                Err(_) => warn!(value = %raw, "Ignoring invalid GROCER_LINE_ITEMS"),
            }
        }

        if let Some(placeholder) = lookup("GROCER_GIFT_PLACEHOLDER") {
            self.checkout.gift_placeholder = placeholder;
        }

        if let Some(raw) = lookup("GROCER_VERIFY_AGE") {
            match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.checkout.verify_age = true,
                "0" | "false" | "no" | "off" => self.checkout.verify_age = false,
                _ => warn!(value = %raw, "Ignoring invalid GROCER_VERIFY_AGE"),
            }
        }

        if let Some(raw) = lookup("GROCER_SCALE_MIN_LBS") {
            match raw.parse::<u32>() {
                Ok(lbs) => self.scale.min_lbs = lbs,
                Err(_) => warn!(value = %raw, "Ignoring invalid GROCER_SCALE_MIN_LBS"),
            }
        }

        if let Some(raw) = lookup("GROCER_SCALE_MAX_LBS") {
            match raw.parse::<u32>() {
                Ok(lbs) => self.scale.max_lbs = lbs,
                Err(_) => warn!(value = %raw, "Ignoring invalid GROCER_SCALE_MAX_LBS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "grocer", "checkout")
            .map(|dirs| dirs.config_dir().join("checkout.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CheckoutConfig::default();
        assert_eq!(config.store.name, "Grocer POS");
        assert_eq!(config.checkout.line_items, 3);
        assert_eq!(config.checkout.gift_placeholder, "Gift Receipt");
        assert!(config.checkout.verify_age);
        assert_eq!(config.scale, ScaleSettings { min_lbs: 1, max_lbs: 5 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: CheckoutConfig = toml::from_str(
            r#"
            [checkout]
            line_items = 5

            [scale]
            max_lbs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.checkout.line_items, 5);
        assert_eq!(config.checkout.gift_placeholder, "Gift Receipt");
        assert_eq!(config.scale.min_lbs, 1);
        assert_eq!(config.scale.max_lbs, 10);
        assert_eq!(config.store.name, "Grocer POS");
    }

    #[test]
    fn test_save_then_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("checkout.toml");

        let mut config = CheckoutConfig::default();
        config.store.name = "Corner Grocer".to_string();
        config.checkout.verify_age = false;
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let loaded: CheckoutConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CheckoutConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.checkout.gift_placeholder, "Gift Receipt");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checkout.toml");
        std::fs::write(&path, "[checkout\nline_items = ").unwrap();

        let err = CheckoutConfig::load(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CheckoutConfig::default();
        config.checkout.line_items = 0;
        assert!(config.validate().is_err());

        let mut config = CheckoutConfig::default();
        config.scale = ScaleSettings { min_lbs: 6, max_lbs: 2 };
        assert!(config.validate().is_err());

        let mut config = CheckoutConfig::default();
        config.checkout.gift_placeholder = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_caps_scale_at_heaviest_reading() {
        let mut config = CheckoutConfig::default();
        config.scale = ScaleSettings { min_lbs: 1, max_lbs: 1_000 };
        assert!(config.validate().is_ok());

        config.scale.max_lbs = 1_001;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.scale.max_lbs = u32::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = CheckoutConfig::default();
        config.apply_overrides(env(&[
            ("GROCER_STORE_NAME", "Night Owl Market"),
            ("GROCER_LINE_ITEMS", "7"),
            ("GROCER_GIFT_PLACEHOLDER", "A gift for you"),
            ("GROCER_VERIFY_AGE", "off"),
            ("GROCER_SCALE_MIN_LBS", "2"),
            ("GROCER_SCALE_MAX_LBS", "3"),
        ]));

        assert_eq!(config.store.name, "Night Owl Market");
        assert_eq!(config.checkout.line_items, 7);
        assert_eq!(config.checkout.gift_placeholder, "A gift for you");
        assert!(!config.checkout.verify_age);
        assert_eq!(config.scale, ScaleSettings { min_lbs: 2, max_lbs: 3 });
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = CheckoutConfig::default();
        config.apply_overrides(env(&[
            ("GROCER_LINE_ITEMS", "many"),
            ("GROCER_VERIFY_AGE", "maybe"),
            ("GROCER_SCALE_MAX_LBS", "-1"),
        ]));
        assert_eq!(config, CheckoutConfig::default());
    }
}
