//! Product catalog module.
//!
//! Contains products, reviews, category tiles, listing filters, and the
//! detail-page selection state.

mod detail;
pub mod fixtures;
mod listing;
mod product;
mod review;

pub use detail::ProductSelection;
pub use fixtures::CategorySummary;
pub use listing::{available_brands, available_categories, ListingFilters, SortOption};
pub use product::{Category, Product, VariantOptions};
pub use review::Review;

use crate::error::CommerceError;

/// Number of products shown in the home page rows.
pub const HOME_ROW_LIMIT: usize = 4;

/// Number of related products shown on the detail page.
pub const RELATED_LIMIT: usize = 4;

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
    categories: Vec<CategorySummary>,
}

impl Catalog {
    /// Create a catalog from explicit records.
    pub fn new(
        products: Vec<Product>,
        reviews: Vec<Review>,
        categories: Vec<CategorySummary>,
    ) -> Self {
        Self {
            products,
            reviews,
            categories,
        }
    }

    /// The built-in demo catalog.
    pub fn demo() -> Self {
        Self::new(
            fixtures::products(),
            fixtures::reviews(),
            fixtures::categories(),
        )
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn find(&self, id: &str) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Trending products for the home page.
    pub fn trending(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_trending)
            .take(HOME_ROW_LIMIT)
            .collect()
    }

    /// New arrivals for the home page.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_new)
            .take(HOME_ROW_LIMIT)
            .collect()
    }

    /// Other products in the same category.
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Reviews shown on a product page.
    ///
    /// The demo data has one shared review pool, so every product shows it.
    pub fn reviews_for(&self, _product: &Product) -> &[Review] {
        &self.reviews
    }

    /// Filtered and sorted product listing.
    pub fn listing(&self, filters: &ListingFilters, sort: SortOption) -> Vec<&Product> {
        filters.apply(&self.products, sort)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.find("3").unwrap().name, "Nourishing Hair Mask");
        assert!(matches!(
            catalog.find("99"),
            Err(CommerceError::ProductNotFound(id)) if id == "99"
        ));
    }

    #[test]
    fn test_home_rows() {
        let catalog = Catalog::demo();
        assert_eq!(ids(&catalog.trending()), vec!["1", "2", "4"]);
        assert_eq!(ids(&catalog.new_arrivals()), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = Catalog::demo();
        let lipstick = catalog.find("2").unwrap();
        assert_eq!(ids(&catalog.related(lipstick)), vec!["4", "6"]);

        let mask = catalog.find("3").unwrap();
        assert!(catalog.related(mask).is_empty());
    }

    #[test]
    fn test_categories_and_reviews() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.categories()[1].name, "Makeup");
        assert_eq!(catalog.categories()[1].product_count, 200);

        let serum = catalog.find("1").unwrap();
        assert_eq!(catalog.reviews_for(serum).len(), 3);
        assert!(catalog.reviews_for(serum).iter().all(|r| r.verified));
    }

    #[test]
    fn test_fixture_prices_and_sale() {
        let catalog = Catalog::demo();
        let serum = catalog.find("1").unwrap();
        assert_eq!(serum.price.display(), "$29.99");
        assert_eq!(serum.savings_percent(), Some(25));

        let retinol = catalog.find("5").unwrap();
        // (55.99 - 45.99) / 55.99 = 17.86%
        assert_eq!(retinol.savings_percent(), Some(18));
        assert!(catalog.products().iter().all(|p| p.in_stock));
    }
}
