//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use glow_commerce::config::{CheckoutConfig, PricingConfig, PromoConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["glow.toml", ".glow.toml", "glow.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Tax and shipping rates.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Promo code table.
    #[serde(default)]
    pub promo: PromoConfig,

    /// Checkout behavior.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: CliConfig = if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .store()
            .validate()
            .with_context(|| format!("Invalid config file: {}", path))?;
        Ok(config)
    }

    /// Storefront settings.
    pub fn store(&self) -> StoreConfig {
        StoreConfig {
            pricing: self.pricing.clone(),
            promo: self.promo.clone(),
            checkout: self.checkout.clone(),
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the cart file; defaults to `~/.local/share/glow`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

impl StorageConfig {
    /// Resolve the data directory.
    pub fn data_dir(&self) -> PathBuf {
        match self.data_dir {
            Some(ref dir) => PathBuf::from(dir),
            None => default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share").join("glow")
    } else {
        std::env::temp_dir().join("glow")
    }
}

/// Generate a default glow.toml config file.
pub fn generate_default_config() -> String {
    r#"# Glow storefront configuration

[pricing]
tax_rate = "0.08"
standard_shipping = "9.99"
express_shipping = "15.99"
# Standard shipping is free when the subtotal is above this amount
free_shipping_threshold = "50"
currency = "USD"

[promo.codes]
WELCOME10 = "10"
SAVE20 = "20"
BEAUTY15 = "15"

[checkout]
payment_delay_ms = 2000
estimated_delivery_days = 5

[storage]
# data_dir = "~/.local/share/glow"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.store(), StoreConfig::default());
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_load_written_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glow.toml");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.checkout.payment_delay_ms = 10;
        config.storage.data_dir = Some("/tmp/glow-data".to_string());
        std::fs::write(path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = CliConfig::load(path).unwrap();
        assert_eq!(loaded.checkout.payment_delay_ms, 10);
        assert_eq!(loaded.storage.data_dir(), PathBuf::from("/tmp/glow-data"));
        assert_eq!(loaded.promo, PromoConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glow.json");
        std::fs::write(&path, r#"{"pricing": {"tax_rate": "1.5"}}"#).unwrap();

        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
