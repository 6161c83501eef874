//! Shipping methods.

use std::str::FromStr;

use crate::config::PricingConfig;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Flat fee, free above the threshold.
    #[default]
    Standard,
    /// Flat fee, never free.
    Express,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 2] = [ShippingMethod::Standard, ShippingMethod::Express];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard Shipping",
            ShippingMethod::Express => "Express Shipping",
        }
    }

    pub fn delivery_estimate(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "5-7 business days",
            ShippingMethod::Express => "2-3 business days",
        }
    }

    /// Fee for a given pre-discount subtotal.
    ///
    /// The threshold comparison is strict: a subtotal equal to the threshold
    /// still pays for standard shipping.
    pub fn cost(&self, subtotal: &Money, config: &PricingConfig) -> Money {
        let fee = match self {
            ShippingMethod::Standard if subtotal.amount > config.free_shipping_threshold => {
                rust_decimal::Decimal::ZERO
            }
            ShippingMethod::Standard => config.standard_shipping,
            ShippingMethod::Express => config.express_shipping,
        };
        Money::new(fee, subtotal.currency)
    }
}

impl FromStr for ShippingMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShippingMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommerceError::UnknownShippingMethod(s.to_string()))
    }
}

/// A row in the shipping method picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub method: ShippingMethod,
    pub name: &'static str,
    pub estimate: &'static str,
    pub price: Money,
}

impl ShippingOption {
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}

/// Every shipping method priced for the current subtotal.
pub fn shipping_options(subtotal: &Money, config: &PricingConfig) -> Vec<ShippingOption> {
    ShippingMethod::ALL
        .into_iter()
        .map(|method| ShippingOption {
            method,
            name: method.display_name(),
            estimate: method.delivery_estimate(),
            price: method.cost(subtotal, config),
        })
        .collect()
}

/// Amount to add before standard shipping becomes free.
///
/// `None` once the subtotal is above the threshold.
pub fn free_shipping_remaining(subtotal: &Money, config: &PricingConfig) -> Option<Money> {
    if subtotal.amount > config.free_shipping_threshold {
        return None;
    }
    Some(Money::new(
        config.free_shipping_threshold - subtotal.amount,
        subtotal.currency,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::from_cents(cents, Currency::USD)
    }

    #[test]
    fn test_standard_threshold_is_strict() {
        let config = PricingConfig::default();
        assert_eq!(ShippingMethod::Standard.cost(&usd(5000), &config), usd(999));
        assert!(ShippingMethod::Standard.cost(&usd(5001), &config).is_zero());
    }

    #[test]
    fn test_express_always_charged() {
        let config = PricingConfig::default();
        assert_eq!(ShippingMethod::Express.cost(&usd(100_000), &config), usd(1599));
    }

    #[test]
    fn test_options() {
        let config = PricingConfig::default();
        let options = shipping_options(&usd(5998), &config);
        assert_eq!(options.len(), 2);
        assert!(options[0].is_free());
        assert_eq!(options[0].estimate, "5-7 business days");
        assert_eq!(options[1].price.display(), "$15.99");
    }

    #[test]
    fn test_free_shipping_remaining() {
        let config = PricingConfig::default();
        assert_eq!(
            free_shipping_remaining(&usd(3299), &config).map(|m| m.display()),
            Some("$17.01".to_string())
        );
        assert_eq!(free_shipping_remaining(&usd(5001), &config), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("express".parse::<ShippingMethod>().unwrap(), ShippingMethod::Express);
        assert_eq!("Standard".parse::<ShippingMethod>().unwrap(), ShippingMethod::Standard);
        assert!("overnight".parse::<ShippingMethod>().is_err());
    }
}
