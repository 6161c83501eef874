//! Page navigation and product selection.
//!
//! Any page is reachable from any other. The one coupling rule: leaving the
//! product detail page clears the selected product.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Category, Product};
use crate::error::CommerceError;

/// Logical pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    /// Product listing; `None` is "all products".
    Category(Option<Category>),
    ProductDetail,
    Cart,
    Checkout,
    Account,
    OrderConfirmation,
}

impl Page {
    /// Page identifier, e.g. "category-makeup".
    pub fn id(&self) -> String {
        match self {
            Page::Home => "home".to_string(),
            Page::Category(Some(category)) => format!("category-{}", category.slug()),
            Page::Category(None) => "category-all".to_string(),
            Page::ProductDetail => "product-detail".to_string(),
            Page::Cart => "cart".to_string(),
            Page::Checkout => "checkout".to_string(),
            Page::Account => "account".to_string(),
            Page::OrderConfirmation => "order-confirmation".to_string(),
        }
    }

    /// Parse an identifier, falling back to the home page.
    pub fn from_id_or_home(id: &str) -> Page {
        id.parse().unwrap_or_else(|_| {
            tracing::warn!(page = id, "Unknown page, showing home");
            Page::Home
        })
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Page {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let page = match s {
            "home" => Page::Home,
            "category-all" => Page::Category(None),
            "product-detail" => Page::ProductDetail,
            "cart" => Page::Cart,
            "checkout" => Page::Checkout,
            "account" => Page::Account,
            "order-confirmation" => Page::OrderConfirmation,
            other => {
                let category = other
                    .strip_prefix("category-")
                    .and_then(|slug| Category::ALL.into_iter().find(|c| c.slug() == slug))
                    .ok_or_else(|| CommerceError::UnknownPage(s.to_string()))?;
                Page::Category(Some(category))
            }
        };
        Ok(page)
    }
}

/// What the view layer should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageView<'a> {
    Home,
    Listing(Option<Category>),
    ProductDetail(&'a Product),
    /// Detail page entered with no product selected; offer a way home.
    ProductNotFound,
    Cart,
    Checkout,
    Account,
    OrderConfirmation,
}

/// Current page and selected product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    current: Page,
    selected: Option<Product>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Switch pages; any page other than the detail page drops the selection.
    pub fn navigate(&mut self, page: Page) {
        if page != Page::ProductDetail && self.selected.take().is_some() {
            tracing::debug!("Cleared product selection");
        }
        tracing::debug!(from = %self.current, to = %page, "Navigate");
        self.current = page;
    }

    /// Select a product and open its detail page.
    pub fn select_product_and_navigate(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, "Selected product");
        self.selected = Some(product);
        self.navigate(Page::ProductDetail);
    }

    /// Resolve the current page into a renderable view.
    pub fn view(&self) -> PageView<'_> {
        match self.current {
            Page::Home => PageView::Home,
            Page::Category(category) => PageView::Listing(category),
            Page::ProductDetail => match self.selected {
                Some(ref product) => PageView::ProductDetail(product),
                None => PageView::ProductNotFound,
            },
            Page::Cart => PageView::Cart,
            Page::Checkout => PageView::Checkout,
            Page::Account => PageView::Account,
            Page::OrderConfirmation => PageView::OrderConfirmation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_page_ids_roundtrip() {
        let pages = [
            Page::Home,
            Page::Category(Some(Category::Skincare)),
            Page::Category(Some(Category::Fragrance)),
            Page::Category(None),
            Page::ProductDetail,
            Page::Cart,
            Page::Checkout,
            Page::Account,
            Page::OrderConfirmation,
        ];
        for page in pages {
            assert_eq!(page.id().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_unknown_page() {
        assert!(matches!(
            "wishlist".parse::<Page>(),
            Err(CommerceError::UnknownPage(_))
        ));
        assert!("category-shoes".parse::<Page>().is_err());
        assert_eq!(Page::from_id_or_home("wishlist"), Page::Home);
    }

    #[test]
    fn test_selection_cleared_on_leave() {
        let mut nav = NavigationState::new();
        nav.select_product_and_navigate(fixtures::products().remove(0));
        assert_eq!(nav.current_page(), Page::ProductDetail);
        assert!(matches!(nav.view(), PageView::ProductDetail(p) if p.id.as_str() == "1"));

        nav.navigate(Page::Cart);
        assert!(nav.selected_product().is_none());

        nav.navigate(Page::ProductDetail);
        assert_eq!(nav.view(), PageView::ProductNotFound);
    }

    #[test]
    fn test_detail_to_detail_keeps_selection() {
        let mut nav = NavigationState::new();
        nav.select_product_and_navigate(fixtures::products().remove(2));
        nav.navigate(Page::ProductDetail);
        assert_eq!(nav.selected_product().map(|p| p.id.as_str()), Some("3"));
    }

    #[test]
    fn test_category_view() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.view(), PageView::Home);
        nav.navigate(Page::Category(Some(Category::Makeup)));
        assert_eq!(nav.view(), PageView::Listing(Some(Category::Makeup)));
    }
}
