//! Persisted cart store.

use crate::cart::{CartLine, Variant};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use glow_cache::{Cache, KvStore, MemoryStore};
use rust_decimal::Decimal;

/// Storage key holding the serialized line sequence.
pub const CART_KEY: &str = "cart";

/// The shopping cart.
///
/// Owns the ordered line sequence and writes the whole sequence back to its
/// cache after every mutation. Nothing here returns an error: a missing or
/// unreadable snapshot restores as an empty cart and failed writes are logged.
#[derive(Debug)]
pub struct CartStore<S: KvStore = MemoryStore> {
    cache: Cache<S>,
    lines: Vec<CartLine>,
    currency: Currency,
}

impl CartStore<MemoryStore> {
    /// Empty cart over a fresh in-memory cache.
    pub fn in_memory() -> Self {
        Self::restore(Cache::in_memory(), Currency::USD)
    }
}

impl<S: KvStore> CartStore<S> {
    /// Restore the cart from its persisted snapshot.
    pub fn restore(cache: Cache<S>, currency: Currency) -> Self {
        let lines = match cache.get::<Vec<CartLine>>(CART_KEY) {
            Ok(Some(lines)) => {
                let restored = lines.len();
                let lines: Vec<CartLine> = lines.into_iter().filter(|l| l.quantity > 0).collect();
                if lines.len() < restored {
                    tracing::warn!(
                        dropped = restored - lines.len(),
                        "Dropped cart lines with zero quantity"
                    );
                }
                tracing::debug!(lines = lines.len(), "Restored cart");
                lines
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored cart is unreadable, starting empty");
                Vec::new()
            }
        };

        Self {
            cache,
            lines,
            currency,
        }
    }

    /// Add a product, merging into an existing `(product, variant)` line.
    ///
    /// A quantity of 0 is treated as 1.
    pub fn add_item(&mut self, product: &Product, quantity: u32, variant: Option<Variant>) {
        let quantity = quantity.max(1);
        match self
            .lines
            .iter_mut()
            .find(|l| l.matches(&product.id, variant.as_ref()))
        {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                tracing::debug!(
                    product_id = %product.id,
                    quantity = line.quantity,
                    "Merged into existing cart line"
                );
            }
            None => {
                tracing::debug!(product_id = %product.id, quantity, "Added cart line");
                self.lines
                    .push(CartLine::new(product.clone(), quantity, variant));
            }
        }
        self.persist();
    }

    /// Remove the line keyed by `(product_id, variant)`. No-op if absent.
    pub fn remove_item(&mut self, product_id: &ProductId, variant: Option<&Variant>) {
        let before = self.lines.len();
        self.lines.retain(|l| !l.matches(product_id, variant));
        if self.lines.len() < before {
            tracing::debug!(product_id = %product_id, "Removed cart line");
        }
        self.persist();
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
        variant: Option<&Variant>,
    ) {
        if quantity <= 0 {
            self.remove_item(product_id, variant);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(product_id, variant))
        {
            line.quantity = quantity;
            tracing::debug!(product_id = %product_id, quantity, "Updated cart line");
        }
        self.persist();
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        tracing::debug!("Cleared cart");
        self.persist();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities, for the header badge. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |n, l| n.saturating_add(l.quantity))
    }

    /// Sum of price times quantity, unrounded.
    pub fn subtotal(&self) -> Money {
        let amount: Decimal = self.lines.iter().map(|l| l.line_total().amount).sum();
        Money::new(amount, self.currency)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(CART_KEY, &self.lines) {
            tracing::warn!(error = %e, "Failed to persist cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use glow_cache::CacheError;

    fn product(id: &str) -> Product {
        fixtures::products()
            .into_iter()
            .find(|p| p.id.as_str() == id)
            .unwrap()
    }

    fn priced(id: &str, cents: i64) -> Product {
        let mut p = product("6");
        p.id = ProductId::new(id);
        p.price = Money::from_cents(cents, Currency::USD);
        p
    }

    #[test]
    fn test_merge_same_variant() {
        let mut cart = CartStore::in_memory();
        let lipstick = product("2");
        cart.add_item(&lipstick, 2, Some(Variant::shade("Ruby Red")));
        cart.add_item(&lipstick, 3, Some(Variant::shade("Ruby Red")));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_distinct_variants() {
        let mut cart = CartStore::in_memory();
        let lipstick = product("2");
        cart.add_item(&lipstick, 1, Some(Variant::shade("Red")));
        cart.add_item(&lipstick, 1, Some(Variant::shade("Blue")));
        cart.add_item(&lipstick, 1, None);

        assert_eq!(cart.items().len(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_zero_quantity_add_counts_as_one() {
        let mut cart = CartStore::in_memory();
        cart.add_item(&product("3"), 0, None);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let mut cart = CartStore::in_memory();
        let mask = product("3");
        let size = Variant::size("200ml");
        cart.add_item(&mask, 2, Some(size.clone()));

        cart.update_quantity(&mask.id, 0, Some(&size));
        assert!(cart.is_empty());

        cart.add_item(&mask, 2, Some(size.clone()));
        cart.update_quantity(&mask.id, -4, Some(&size));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_and_remove_require_exact_key() {
        let mut cart = CartStore::in_memory();
        let mask = product("3");
        cart.add_item(&mask, 1, Some(Variant::size("200ml")));

        cart.update_quantity(&mask.id, 7, Some(&Variant::size("500ml")));
        cart.remove_item(&mask.id, None);
        assert_eq!(cart.item_count(), 1);

        cart.update_quantity(&mask.id, 7, Some(&Variant::size("200ml")));
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = CartStore::in_memory();
        cart.add_item(&priced("a", 1000), 2, None);
        cart.add_item(&priced("b", 500), 3, None);

        assert_eq!(cart.subtotal().amount, Decimal::from(35));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_item_count_saturates() {
        let mut cart = CartStore::in_memory();
        let serum = product("1");
        let mask = product("3");
        cart.add_item(&serum, 1, None);
        cart.add_item(&mask, 1, None);
        cart.update_quantity(&serum.id, 3_000_000_000, None);
        cart.update_quantity(&mask.id, 3_000_000_000, None);

        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        let cart = CartStore::in_memory();
        assert!(cart.subtotal().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_snapshot_survives_restart() {
        let cache = Cache::in_memory();
        {
            let mut cart = CartStore::restore(cache.clone(), Currency::USD);
            cart.add_item(&product("1"), 2, Some(Variant::size("30ml")));
            cart.add_item(&product("2"), 1, Some(Variant::shade("Berry Crush")));
        }

        let cart = CartStore::restore(cache, Currency::USD);
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].selected_variant, Some(Variant::size("30ml")));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_product_snapshot_is_kept() {
        let cache = Cache::in_memory();
        let mut serum = product("1");
        let mut cart = CartStore::restore(cache.clone(), Currency::USD);
        cart.add_item(&serum, 1, None);

        serum.price = Money::from_cents(100, Currency::USD);
        assert_eq!(cart.subtotal().display(), "$29.99");

        let restored = CartStore::restore(cache, Currency::USD);
        assert_eq!(restored.subtotal().display(), "$29.99");
    }

    #[test]
    fn test_corrupt_snapshot_restores_empty() {
        let cache = Cache::in_memory();
        cache.set(CART_KEY, "not a cart").unwrap();

        let cart = CartStore::restore(cache, Currency::USD);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_persists() {
        let cache = Cache::in_memory();
        let mut cart = CartStore::restore(cache.clone(), Currency::USD);
        cart.add_item(&product("4"), 1, Some(Variant::shade("Tan")));
        cart.clear();

        let stored: Option<Vec<CartLine>> = cache.get(CART_KEY).unwrap();
        assert_eq!(stored, Some(vec![]));
    }

    struct ReadOnlyStore;

    impl KvStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            Err(CacheError::Unavailable("read-only".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let mut cart = CartStore::restore(Cache::new(ReadOnlyStore), Currency::USD);
        cart.add_item(&product("5"), 2, None);
        assert_eq!(cart.item_count(), 2);
    }
}
