//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart and navigation actions never fail; these errors come from parsing
/// user input, from the checkout flow, and from the persistence layer.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Unknown category slug.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown page identifier.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Shade or size the product is not offered in.
    #[error("Unknown {kind} for product {product}: {value}")]
    UnknownVariantOption {
        product: String,
        kind: &'static str,
        value: String,
    },

    /// Unknown sort option.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Unknown shipping method.
    #[error("Unknown shipping method: {0}")]
    UnknownShippingMethod(String),

    /// Unknown payment method.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Checkout attempted with nothing in the cart.
    #[error("No items to checkout")]
    EmptyCart,

    /// Checkout step is missing required fields.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// A payment is already being processed.
    #[error("Payment is already processing")]
    PaymentInProgress,

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
