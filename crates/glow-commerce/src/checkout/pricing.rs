//! Order total calculation.

use crate::cart::CartLine;
use crate::checkout::{AppliedPromo, ShippingMethod};
use crate::config::PricingConfig;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order totals, kept at full precision.
///
/// Call [`OrderTotals::rounded`] or [`Money::display`] at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub discount: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderTotals {
    /// Every field rounded to the currency's minor unit.
    pub fn rounded(&self) -> OrderTotals {
        OrderTotals {
            subtotal: self.subtotal.rounded(),
            discount: self.discount.rounded(),
            shipping: self.shipping.rounded(),
            tax: self.tax.rounded(),
            total: self.total.rounded(),
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}

/// Derive totals from cart lines, the applied promo, and a shipping method.
///
/// - discount = subtotal × percent / 100
/// - shipping is decided on the subtotal before discount
/// - tax = rate × (subtotal − discount)
/// - total = subtotal + shipping + tax − discount
///
/// An empty cart yields all-zero totals.
pub fn calculate(
    lines: &[CartLine],
    promo: Option<&AppliedPromo>,
    shipping: ShippingMethod,
    config: &PricingConfig,
) -> OrderTotals {
    let currency = config.currency;
    let subtotal_amount: Decimal = lines.iter().map(|l| l.line_total().amount).sum();
    let subtotal = Money::new(subtotal_amount, currency);

    if lines.is_empty() {
        let zero = Money::zero(currency);
        return OrderTotals {
            subtotal: zero,
            discount: zero,
            shipping: zero,
            tax: zero,
            total: zero,
        };
    }

    let discount = match promo {
        Some(promo) => subtotal.percentage(promo.percent),
        None => Money::zero(currency),
    };
    let shipping = shipping.cost(&subtotal, config);
    let tax = (subtotal - discount).scale(config.tax_rate);
    let total = subtotal + shipping + tax - discount;

    OrderTotals {
        subtotal,
        discount,
        shipping,
        tax,
        total,
    }
}
