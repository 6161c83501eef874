//! Shopping cart module.
//!
//! Contains cart lines, variants, and the persisted cart store.

mod line;
mod store;

pub use line::{CartLine, Variant};
pub use store::{CartStore, CART_KEY};
