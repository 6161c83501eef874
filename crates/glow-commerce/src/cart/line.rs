//! Cart line types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shade and size chosen for a cart line.
///
/// Two lines for the same product merge only when their variants are equal
/// field by field, and `None` is distinct from an empty `Variant`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl Variant {
    pub fn shade(shade: impl Into<String>) -> Self {
        Self {
            shade: Some(shade.into()),
            size: None,
        }
    }

    pub fn size(size: impl Into<String>) -> Self {
        Self {
            shade: None,
            size: Some(size.into()),
        }
    }

    /// Build from optional selections; `None` when nothing is selected.
    pub fn from_selection(shade: Option<String>, size: Option<String>) -> Option<Self> {
        let variant = Self { shade, size };
        if variant.is_empty() {
            None
        } else {
            Some(variant)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shade.is_none() && self.size.is_none()
    }

    /// Human-readable label, e.g. "Shade: Ruby Red, Size: 30ml".
    pub fn label(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref shade) = self.shade {
            parts.push(format!("Shade: {}", shade));
        }
        if let Some(ref size) = self.size {
            parts.push(format!("Size: {}", size));
        }
        parts.join(", ")
    }
}

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    /// Product record as it was when the line was added.
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<Variant>,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32, variant: Option<Variant>) -> Self {
        Self {
            product_id: product.id.clone(),
            product,
            quantity,
            selected_variant: variant,
        }
    }

    /// Check whether this line is keyed by `(product_id, variant)`.
    pub fn matches(&self, product_id: &ProductId, variant: Option<&Variant>) -> bool {
        self.product_id == *product_id && self.selected_variant.as_ref() == variant
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}
