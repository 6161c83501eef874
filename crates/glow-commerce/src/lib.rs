//! Storefront domain types and logic for Glow.
//!
//! This crate holds everything a Glow view layer renders from:
//!
//! - **Catalog**: Products, reviews, category tiles, listing filters and sort
//! - **Cart**: Persisted cart lines keyed by product and variant
//! - **Checkout**: Pricing calculator, promo codes, shipping, two-step flow
//! - **Navigation**: Current page and selected product
//! - **Account**: Demo profile, order history, saved addresses
//!
//! # Example
//!
//! ```rust,ignore
//! use glow_commerce::prelude::*;
//!
//! let mut store = Storefront::in_memory();
//! store.add_to_cart("1", 2, Some(Variant::size("30ml")))?;
//! store.apply_promo("WELCOME10");
//!
//! let totals = store.totals();
//! println!("Total: {}", totals.total.display());
//!
//! store.begin_checkout()?;
//! store.checkout_mut().set_shipping_info(info);
//! store.checkout_mut().continue_to_payment()?;
//! let confirmation = store.submit_order().await?;
//! ```

pub mod account;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod navigation;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod storefront;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CheckoutConfig, PricingConfig, PromoConfig, StoreConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, CategorySummary, ListingFilters, Product, ProductSelection, Review,
        SortOption, VariantOptions,
    };

    // Cart
    pub use crate::cart::{CartLine, CartStore, Variant};

    // Checkout
    pub use crate::checkout::{
        AppliedPromo, CheckoutSession, CheckoutStep, OrderConfirmation, OrderTotals,
        PaymentMethod, PromoState, PromoTable, ShippingInfo, ShippingMethod, ShippingOption,
    };

    // Navigation
    pub use crate::navigation::{NavigationState, Page, PageView};

    // Account
    pub use crate::account::{Account, OrderStatus, OrderSummary, SavedAddress, UserProfile};
}
