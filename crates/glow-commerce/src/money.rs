//! Money amounts.
//!
//! Amounts are exact decimals. Arithmetic keeps full precision and rounding
//! to cents happens only when a value is displayed, so a chain like
//! subtotal, discount, tax, total never compounds rounding error.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Currencies a storefront can be priced in. All use two minor digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    pub const MINOR_DIGITS: u32 = 2;

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An exact amount in one currency.
///
/// `+` and `-` keep the left operand's currency; a storefront prices
/// everything in the one currency from its config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Major units (dollars, not cents).
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Build from minor units.
    ///
    /// ```
    /// use glow_commerce::money::{Currency, Money};
    /// let price = Money::from_cents(2999, Currency::USD);
    /// assert_eq!(price.display(), "$29.99");
    /// ```
    pub fn from_cents(cents: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(cents, Currency::MINOR_DIGITS), currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Round to cents, half away from zero.
    pub fn rounded(&self) -> Money {
        let amount = self
            .amount
            .round_dp_with_strategy(Currency::MINOR_DIGITS, RoundingStrategy::MidpointAwayFromZero);
        Money::new(amount, self.currency)
    }

    /// Symbol and rounded amount, e.g. "$49.99".
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.rounded().amount)
    }

    /// Price times quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        self.scale(Decimal::from(quantity))
    }

    /// `percent`% of this amount at full precision.
    pub fn percentage(&self, percent: Decimal) -> Money {
        self.scale(percent / Decimal::ONE_HUNDRED)
    }

    /// Multiply by a rate such as a tax rate.
    pub fn scale(&self, factor: Decimal) -> Money {
        Money::new(self.amount * factor, self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.amount + rhs.amount, self.currency)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::new(self.amount - rhs.amount, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::from_cents(cents, Currency::USD)
    }

    #[test]
    fn test_display() {
        assert_eq!(usd(4999).display(), "$49.99");
        assert_eq!(usd(1600).display(), "$16.00");
        assert_eq!(Money::zero(Currency::USD).display(), "$0.00");
        assert_eq!(Money::from_cents(4200, Currency::GBP).to_string(), "\u{00a3}42.00");
    }

    #[test]
    fn test_display_rounds_only_at_render() {
        let discount = usd(5998).percentage(Decimal::from(10));
        assert_eq!(discount.amount, Decimal::new(5998, 3));
        assert_eq!(discount.display(), "$6.00");
        assert_eq!(discount.rounded().amount, Decimal::new(600, 2));
    }

    #[test]
    fn test_rounding_midpoint_away_from_zero() {
        assert_eq!(Money::new(Decimal::new(1005, 3), Currency::USD).display(), "$1.01");
        assert_eq!(Money::new(Decimal::new(58300_56, 5), Currency::USD).display(), "$58.30");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(usd(2999).multiply(2), usd(5998));
        assert_eq!(usd(1000) + usd(300) - usd(50), usd(1250));
        assert_eq!(usd(10000).scale(Decimal::new(8, 2)), usd(800));
    }
}
