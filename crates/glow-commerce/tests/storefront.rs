//! End-to-end storefront behavior through the public API.

use glow_cache::Cache;
use glow_commerce::prelude::*;
use rust_decimal::Decimal;

fn product(price_cents: i64, id: &str) -> Product {
    let mut product = Catalog::demo().find("6").unwrap().clone();
    product.id = ProductId::new(id);
    product.price = Money::from_cents(price_cents, Currency::USD);
    product
}

fn shipping_info() -> ShippingInfo {
    ShippingInfo {
        email: "sarah.johnson@example.com".to_string(),
        first_name: "Sarah".to_string(),
        last_name: "Johnson".to_string(),
        address: "123 Main Street".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip_code: "10001".to_string(),
        ..ShippingInfo::default()
    }
}

fn fast_config() -> StoreConfig {
    let mut config = StoreConfig::default();
    config.checkout.payment_delay_ms = 5;
    config
}

#[test]
fn test_merge_invariant() {
    let mut store = Storefront::in_memory();
    let shade = Variant::shade("Berry Crush");
    store.add_to_cart("2", 2, Some(shade.clone())).unwrap();
    store.add_to_cart("2", 3, Some(shade.clone())).unwrap();

    assert_eq!(store.cart().items().len(), 1);
    assert_eq!(store.cart().items()[0].quantity, 5);
}

#[test]
fn test_variant_distinctness() {
    let mut store = Storefront::in_memory();
    store.add_to_cart("2", 1, Some(Variant::shade("Red"))).unwrap();
    store.add_to_cart("2", 1, Some(Variant::shade("Blue"))).unwrap();

    assert_eq!(store.cart().items().len(), 2);
}

#[test]
fn test_removal_via_zero() {
    let mut store = Storefront::in_memory();
    let size = Variant::size("30ml");
    store.add_to_cart("5", 1, Some(size.clone())).unwrap();
    store.update_quantity(&ProductId::new("5"), 0, Some(&size));

    assert!(store
        .cart()
        .items()
        .iter()
        .all(|l| !l.matches(&ProductId::new("5"), Some(&size))));
    assert_eq!(store.cart().item_count(), 0);
}

#[test]
fn test_subtotal_correctness() {
    let mut store = Storefront::in_memory();
    store.add_product(&product(1000, "a"), 2, None);
    store.add_product(&product(500, "b"), 3, None);

    assert_eq!(store.cart().subtotal().amount, Decimal::from(35));
}

#[test]
fn test_huge_quantities_saturate_item_count() {
    let mut store = Storefront::in_memory();
    store.add_to_cart("1", 1, None).unwrap();
    store.add_to_cart("3", 1, None).unwrap();
    store.update_quantity(&ProductId::new("1"), 3_000_000_000, None);
    store.update_quantity(&ProductId::new("3"), 3_000_000_000, None);

    assert_eq!(store.cart().item_count(), u32::MAX);
}

#[test]
fn test_free_shipping_boundary() {
    let mut at = Storefront::in_memory();
    at.add_product(&product(5000, "a"), 1, None);
    assert_eq!(at.totals().shipping.display(), "$9.99");

    let mut above = Storefront::in_memory();
    above.add_product(&product(5001, "a"), 1, None);
    assert!(above.totals().shipping.is_zero());
}

#[test]
fn test_promo_rejection() {
    let mut store = Storefront::in_memory();
    store.add_to_cart("1", 1, None).unwrap();
    let before = store.totals();

    assert!(!store.apply_promo("BOGUS"));
    assert!(store.applied_promo().is_none());
    assert_eq!(store.totals(), before);
}

#[test]
fn test_selection_clear_invariant() {
    let mut store = Storefront::in_memory();
    store.select_product("1").unwrap();
    assert!(matches!(store.view(), PageView::ProductDetail(_)));

    store.navigate(Page::Cart);
    assert!(store.navigation().selected_product().is_none());

    store.navigate(Page::ProductDetail);
    assert_eq!(store.view(), PageView::ProductNotFound);
}

#[test]
fn test_end_to_end_totals() {
    let mut store = Storefront::in_memory();
    store.add_product(&product(2999, "serum"), 2, None);
    store.apply_promo("WELCOME10");
    store.select_shipping(ShippingMethod::Standard);

    let totals = store.totals();
    assert_eq!(totals.subtotal.amount, Decimal::new(5998, 2));
    assert!(totals.shipping.is_zero());
    assert_eq!(totals.discount.amount, Decimal::new(5998, 3));
    assert_eq!(totals.tax.amount, Decimal::new(431856, 5));
    assert_eq!(totals.total.display(), "$58.30");
}

#[test]
fn test_empty_cart_totals_and_checkout() {
    let mut store = Storefront::in_memory();
    let totals = store.totals();
    assert!(totals.total.is_zero());
    assert!(totals.shipping.is_zero());
    assert!(matches!(store.begin_checkout(), Err(CommerceError::EmptyCart)));
}

#[test]
fn test_cart_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();

    {
        let cache = Cache::open(dir.path()).unwrap();
        let mut store = Storefront::new(StoreConfig::default(), Catalog::demo(), cache);
        store.add_to_cart("1", 2, Some(Variant::size("50ml"))).unwrap();
        store.add_to_cart("4", 1, Some(Variant::shade("Deep"))).unwrap();
        store.apply_promo("SAVE20");
    }

    let cache = Cache::open(dir.path()).unwrap();
    let store = Storefront::new(StoreConfig::default(), Catalog::demo(), cache);
    assert_eq!(store.cart().item_count(), 3);
    assert_eq!(
        store.cart().items()[0].selected_variant,
        Some(Variant::size("50ml"))
    );
    // Promo codes are not persisted.
    assert!(store.applied_promo().is_none());
}

#[test]
fn test_corrupt_persisted_cart_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), b"{ not json").unwrap();

    let cache = Cache::open(dir.path()).unwrap();
    let store = Storefront::new(StoreConfig::default(), Catalog::demo(), cache);
    assert!(store.cart().is_empty());
}

#[test]
fn test_detail_page_add_to_cart() {
    let mut store = Storefront::in_memory();
    let lipstick = store.catalog().find("2").unwrap().clone();

    let mut selection = ProductSelection::new(lipstick);
    selection.select_shade("Coral Sunset").unwrap();
    selection.increment();
    store.add_product(selection.product(), selection.quantity(), selection.variant());

    let line = &store.cart().items()[0];
    assert_eq!(line.quantity, 2);
    assert_eq!(line.selected_variant, Some(Variant::shade("Coral Sunset")));
}

#[tokio::test]
async fn test_checkout_clears_cart_and_confirms() {
    let mut store = Storefront::new(fast_config(), Catalog::demo(), Cache::in_memory());
    store.add_to_cart("1", 2, Some(Variant::size("30ml"))).unwrap();
    store.apply_promo("WELCOME10");

    store.begin_checkout().unwrap();
    assert!(matches!(
        store.checkout_mut().continue_to_payment(),
        Err(CommerceError::CheckoutIncomplete(_))
    ));
    store.checkout_mut().set_shipping_info(shipping_info());
    store.checkout_mut().select_payment(PaymentMethod::PayPal);
    store.checkout_mut().continue_to_payment().unwrap();

    let confirmation = store.submit_order().await.unwrap().clone();
    assert_eq!(confirmation.totals.total.display(), "$58.30");
    assert_eq!(confirmation.item_count(), 2);
    assert!(confirmation.order_number.as_str().starts_with("ORD-"));
    assert!(confirmation.tracking_number.starts_with("TRK"));

    assert!(store.cart().is_empty());
    assert!(store.applied_promo().is_none());
    assert_eq!(store.view(), PageView::OrderConfirmation);
    assert_eq!(store.last_order(), Some(&confirmation));
    assert!(!store.checkout().is_processing());
}

#[tokio::test]
async fn test_submit_twice_rejected() {
    let mut store = Storefront::new(fast_config(), Catalog::demo(), Cache::in_memory());
    store.add_to_cart("3", 1, None).unwrap();
    store.begin_checkout().unwrap();
    store.checkout_mut().set_shipping_info(shipping_info());
    store.checkout_mut().continue_to_payment().unwrap();

    store.submit_order().await.unwrap();
    assert!(matches!(
        store.submit_order().await,
        Err(CommerceError::EmptyCart)
    ));
}
