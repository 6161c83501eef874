//! Checkout module.
//!
//! Contains the pricing calculator, promo codes, shipping methods, the
//! two-step checkout flow, and order confirmations.

mod address;
mod flow;
mod order;
mod pricing;
mod promo;
mod shipping;

pub use address::ShippingInfo;
pub use flow::{CheckoutSession, CheckoutStep, PaymentMethod};
pub use order::{OrderConfirmation, PlacedOrder};
pub use pricing::{calculate, OrderTotals};
pub use promo::{AppliedPromo, PromoState, PromoTable};
pub use shipping::{free_shipping_remaining, shipping_options, ShippingMethod, ShippingOption};
