//! Product and category types.

use std::str::FromStr;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skincare,
    Makeup,
    Haircare,
    Fragrance,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 4] = [
        Category::Skincare,
        Category::Makeup,
        Category::Haircare,
        Category::Fragrance,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Skincare => "skincare",
            Category::Makeup => "makeup",
            Category::Haircare => "haircare",
            Category::Fragrance => "fragrance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Skincare => "Skincare",
            Category::Makeup => "Makeup",
            Category::Haircare => "Haircare",
            Category::Fragrance => "Fragrance",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

/// Variant options a product is sold in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOptions {
    /// Color shades (makeup).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shades: Vec<String>,
    /// Container sizes (e.g., "30ml").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
}

impl VariantOptions {
    /// Check if the product has no selectable options.
    pub fn is_empty(&self) -> bool {
        self.shades.is_empty() && self.sizes.is_empty()
    }
}

/// A product in the catalog.
///
/// Cart lines keep a full copy of this record taken when the item was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Category the product is listed under.
    pub category: Category,
    /// Current selling price.
    pub price: Money,
    /// Compare-at price, shown struck through when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Average rating out of 5.
    pub rating: f32,
    /// Number of reviews.
    pub review_count: u32,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Long description.
    pub description: String,
    /// Key ingredients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    /// Marketing benefit bullet points.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    /// Selectable variant options.
    #[serde(default)]
    pub variants: VariantOptions,
    /// Whether the product can be purchased.
    pub in_stock: bool,
    /// Shown in "new arrivals".
    #[serde(default)]
    pub is_new: bool,
    /// Shown in "trending".
    #[serde(default)]
    pub is_trending: bool,
}

impl Product {
    /// Primary image URL, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check if the product is sold below its compare-at price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount > self.price.amount)
            .unwrap_or(false)
    }

    /// Percentage saved against the compare-at price, rounded to a whole number.
    pub fn savings_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if !self.is_on_sale() || original.amount.is_zero() {
            return None;
        }
        let percent = (original.amount - self.price.amount) / original.amount * Decimal::ONE_HUNDRED;
        percent
            .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }
}
