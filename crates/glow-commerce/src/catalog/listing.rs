//! Product listing filters and sort order.

use std::str::FromStr;

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Most reviewed first.
    #[default]
    Popular,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// New arrivals first.
    Newest,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Popular,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
        SortOption::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Popular => "popular",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
            SortOption::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Popular => "Most Popular",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Newest => "Newest",
        }
    }

    /// Sort in place. The sort is stable, ties keep catalog order.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortOption::Popular => products.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
            SortOption::PriceLow => products.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
            SortOption::PriceHigh => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
            SortOption::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOption::Newest => products.sort_by(|a, b| b.is_new.cmp(&a.is_new)),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownSortOption(s.to_string()))
    }
}

/// Filters shown in the listing sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingFilters {
    /// Allowed categories, empty means all.
    pub categories: Vec<Category>,
    /// Allowed brands, empty means all.
    pub brands: Vec<String>,
    /// Inclusive price bounds.
    pub price_min: Decimal,
    pub price_max: Decimal,
    /// Minimum average rating.
    pub min_rating: f32,
    /// Hide out-of-stock products.
    pub in_stock_only: bool,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            brands: Vec::new(),
            price_min: Decimal::ZERO,
            price_max: Decimal::ONE_HUNDRED,
            min_rating: 0.0,
            in_stock_only: false,
        }
    }
}

impl ListingFilters {
    /// Filters for a category page; `None` is the "all products" page.
    pub fn for_category(category: Option<Category>) -> Self {
        Self {
            categories: category.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Toggle a category checkbox.
    pub fn set_category(&mut self, category: Category, checked: bool) {
        self.categories.retain(|c| *c != category);
        if checked {
            self.categories.push(category);
        }
    }

    /// Toggle a brand checkbox.
    pub fn set_brand(&mut self, brand: &str, checked: bool) {
        self.brands.retain(|b| b != brand);
        if checked {
            self.brands.push(brand.to_string());
        }
    }

    /// Check whether a single product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.iter().any(|b| *b == product.brand) {
            return false;
        }
        if product.price.amount < self.price_min || product.price.amount > self.price_max {
            return false;
        }
        if product.rating < self.min_rating {
            return false;
        }
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        true
    }

    /// Filter then sort a product list.
    pub fn apply<'a>(&self, products: &'a [Product], sort: SortOption) -> Vec<&'a Product> {
        let mut matching: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        sort.sort(&mut matching);
        matching
    }
}

/// Distinct brands in first-appearance order.
pub fn available_brands(products: &[Product]) -> Vec<&str> {
    let mut brands: Vec<&str> = Vec::new();
    for product in products {
        if !brands.contains(&product.brand.as_str()) {
            brands.push(&product.brand);
        }
    }
    brands
}

/// Distinct categories in first-appearance order.
pub fn available_categories(products: &[Product]) -> Vec<Category> {
    let mut categories = Vec::new();
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category);
        }
    }
    categories
}
