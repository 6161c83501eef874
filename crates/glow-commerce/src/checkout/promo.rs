//! Promo codes.

use std::collections::BTreeMap;

use crate::config::PromoConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A promo code accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedPromo {
    /// Normalized (uppercase) code.
    pub code: String,
    /// Percent off the subtotal.
    pub percent: Decimal,
}

/// Lookup table of valid codes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromoTable {
    codes: BTreeMap<String, Decimal>,
}

impl PromoTable {
    pub fn new(codes: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        Self {
            codes: codes
                .into_iter()
                .map(|(code, percent)| (code.to_uppercase(), percent))
                .collect(),
        }
    }

    pub fn from_config(config: &PromoConfig) -> Self {
        Self::new(config.codes.clone())
    }

    /// Match a code case-insensitively.
    pub fn lookup(&self, code: &str) -> Option<AppliedPromo> {
        let code = code.to_uppercase();
        self.codes.get(&code).map(|percent| AppliedPromo {
            code,
            percent: *percent,
        })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// The promo slot shared by the cart and checkout screens.
///
/// Holds at most one code. Unknown codes are ignored and leave the current
/// promo in place. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct PromoState {
    table: PromoTable,
    applied: Option<AppliedPromo>,
}

impl PromoState {
    pub fn new(table: PromoTable) -> Self {
        Self {
            table,
            applied: None,
        }
    }

    /// Try to apply a code. Returns whether it was accepted.
    pub fn apply(&mut self, code: &str) -> bool {
        match self.table.lookup(code) {
            Some(promo) => {
                tracing::info!(code = %promo.code, percent = %promo.percent, "Applied promo code");
                self.applied = Some(promo);
                true
            }
            None => {
                tracing::debug!(code, "Ignored unknown promo code");
                false
            }
        }
    }

    pub fn remove(&mut self) {
        if let Some(promo) = self.applied.take() {
            tracing::debug!(code = %promo.code, "Removed promo code");
        }
    }

    pub fn applied(&self) -> Option<&AppliedPromo> {
        self.applied.as_ref()
    }
}
