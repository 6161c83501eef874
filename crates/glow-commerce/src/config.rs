//! Storefront configuration.
//!
//! Every section has serde defaults, so an empty document deserializes to
//! the demo store's settings.

use std::collections::BTreeMap;

use crate::error::CommerceError;
use crate::money::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub promo: PromoConfig,

    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl StoreConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.pricing.validate()?;
        self.promo.validate()?;
        self.checkout.validate()
    }
}

/// Tax and shipping rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate as a fraction, applied after the promo discount.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    /// Standard shipping fee below the free shipping threshold.
    #[serde(default = "default_standard_shipping")]
    pub standard_shipping: Decimal,

    /// Express shipping fee, always charged.
    #[serde(default = "default_express_shipping")]
    pub express_shipping: Decimal,

    /// Standard shipping is free when the subtotal is strictly above this.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: Decimal,

    #[serde(default)]
    pub currency: Currency,
}

fn default_tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

fn default_standard_shipping() -> Decimal {
    Decimal::new(999, 2)
}

fn default_express_shipping() -> Decimal {
    Decimal::new(1599, 2)
}

fn default_free_shipping_threshold() -> Decimal {
    Decimal::from(50)
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            standard_shipping: default_standard_shipping(),
            express_shipping: default_express_shipping(),
            free_shipping_threshold: default_free_shipping_threshold(),
            currency: Currency::default(),
        }
    }
}

impl PricingConfig {
    fn validate(&self) -> Result<(), CommerceError> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(CommerceError::InvalidConfig(format!(
                "pricing.tax_rate must be between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        for (name, value) in [
            ("standard_shipping", self.standard_shipping),
            ("express_shipping", self.express_shipping),
            ("free_shipping_threshold", self.free_shipping_threshold),
        ] {
            if value < Decimal::ZERO {
                return Err(CommerceError::InvalidConfig(format!(
                    "pricing.{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Promo code table, code to percent off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromoConfig {
    #[serde(default = "default_promo_codes")]
    pub codes: BTreeMap<String, Decimal>,
}

fn default_promo_codes() -> BTreeMap<String, Decimal> {
    [("WELCOME10", 10), ("SAVE20", 20), ("BEAUTY15", 15)]
        .into_iter()
        .map(|(code, percent)| (code.to_string(), Decimal::from(percent)))
        .collect()
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            codes: default_promo_codes(),
        }
    }
}

impl PromoConfig {
    fn validate(&self) -> Result<(), CommerceError> {
        for (code, percent) in &self.codes {
            if code.trim().is_empty() {
                return Err(CommerceError::InvalidConfig(
                    "promo.codes contains an empty code".to_string(),
                ));
            }
            if *percent <= Decimal::ZERO || *percent > Decimal::ONE_HUNDRED {
                return Err(CommerceError::InvalidConfig(format!(
                    "promo code {} must discount between 0 and 100 percent, got {}",
                    code, percent
                )));
            }
        }
        Ok(())
    }
}

/// Checkout behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated payment processing time.
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,

    /// Days from order date to estimated delivery.
    #[serde(default = "default_estimated_delivery_days")]
    pub estimated_delivery_days: u32,
}

fn default_payment_delay_ms() -> u64 {
    2000
}

fn default_estimated_delivery_days() -> u32 {
    5
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            payment_delay_ms: default_payment_delay_ms(),
            estimated_delivery_days: default_estimated_delivery_days(),
        }
    }
}

impl CheckoutConfig {
    fn validate(&self) -> Result<(), CommerceError> {
        if self.estimated_delivery_days == 0 {
            return Err(CommerceError::InvalidConfig(
                "checkout.estimated_delivery_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.pricing.tax_rate, Decimal::new(8, 2));
        assert_eq!(config.pricing.standard_shipping.to_string(), "9.99");
        assert_eq!(config.pricing.express_shipping.to_string(), "15.99");
        assert_eq!(config.pricing.free_shipping_threshold, Decimal::from(50));
        assert_eq!(config.promo.codes.len(), 3);
        assert_eq!(config.promo.codes["SAVE20"], Decimal::from(20));
        assert_eq!(config.checkout.payment_delay_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"pricing": {"tax_rate": "0.10"}}"#).unwrap();
        assert_eq!(config.pricing.tax_rate, Decimal::new(10, 2));
        assert_eq!(config.pricing.express_shipping, Decimal::new(1599, 2));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StoreConfig::default();
        config.pricing.tax_rate = Decimal::from(2);
        assert!(matches!(config.validate(), Err(CommerceError::InvalidConfig(_))));

        let mut config = StoreConfig::default();
        config.pricing.express_shipping = Decimal::from(-1);
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.promo.codes.insert("FREE".to_string(), Decimal::from(150));
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.checkout.estimated_delivery_days = 0;
        assert!(config.validate().is_err());
    }
}
