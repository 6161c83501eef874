//! Storefront facade.
//!
//! Owns the cart, promo slot, checkout session, and navigation state, and
//! exposes the actions and snapshot getters a view layer drives.

use crate::account::Account;
use crate::cart::{CartStore, Variant};
use crate::catalog::{Catalog, Product};
use crate::checkout::{
    calculate, free_shipping_remaining, shipping_options, AppliedPromo, CheckoutSession,
    OrderConfirmation, OrderTotals, PlacedOrder, PromoState, PromoTable, ShippingMethod,
    ShippingOption,
};
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::navigation::{NavigationState, Page, PageView};
use glow_cache::{Cache, KvStore, MemoryStore};

/// A single shopper's storefront session.
#[derive(Debug)]
pub struct Storefront<S: KvStore = MemoryStore> {
    config: StoreConfig,
    catalog: Catalog,
    account: Account,
    cart: CartStore<S>,
    promo: PromoState,
    checkout: CheckoutSession,
    navigation: NavigationState,
    last_order: Option<OrderConfirmation>,
}

impl Storefront<MemoryStore> {
    /// Demo storefront with default settings and no persisted cart.
    pub fn in_memory() -> Self {
        Self::new(StoreConfig::default(), Catalog::demo(), Cache::in_memory())
    }
}

impl<S: KvStore> Storefront<S> {
    /// Build a storefront, restoring the cart from `cache`.
    pub fn new(config: StoreConfig, catalog: Catalog, cache: Cache<S>) -> Self {
        let cart = CartStore::restore(cache, config.pricing.currency);
        let promo = PromoState::new(PromoTable::from_config(&config.promo));
        Self {
            config,
            catalog,
            account: Account::demo(),
            cart,
            promo,
            checkout: CheckoutSession::new(),
            navigation: NavigationState::new(),
            last_order: None,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    // Cart actions

    /// Add a catalog product by id.
    pub fn add_to_cart(
        &mut self,
        product_id: &str,
        quantity: u32,
        variant: Option<Variant>,
    ) -> Result<(), CommerceError> {
        let product = self.catalog.find(product_id)?.clone();
        self.cart.add_item(&product, quantity, variant);
        Ok(())
    }

    /// Add an explicit product record, as the detail page does.
    pub fn add_product(&mut self, product: &Product, quantity: u32, variant: Option<Variant>) {
        self.cart.add_item(product, quantity, variant);
    }

    pub fn remove_from_cart(&mut self, product_id: &ProductId, variant: Option<&Variant>) {
        self.cart.remove_item(product_id, variant);
    }

    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
        variant: Option<&Variant>,
    ) {
        self.cart.update_quantity(product_id, quantity, variant);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // Promo and shipping

    /// Apply a promo code; unknown codes are ignored.
    pub fn apply_promo(&mut self, code: &str) -> bool {
        self.promo.apply(code)
    }

    pub fn remove_promo(&mut self) {
        self.promo.remove();
    }

    pub fn applied_promo(&self) -> Option<&AppliedPromo> {
        self.promo.applied()
    }

    pub fn select_shipping(&mut self, method: ShippingMethod) {
        self.checkout.select_shipping(method);
    }

    pub fn shipping_method(&self) -> ShippingMethod {
        self.checkout.shipping_method()
    }

    /// Totals for the current cart, promo, and shipping method.
    pub fn totals(&self) -> OrderTotals {
        calculate(
            self.cart.items(),
            self.promo.applied(),
            self.checkout.shipping_method(),
            &self.config.pricing,
        )
    }

    pub fn shipping_options(&self) -> Vec<ShippingOption> {
        shipping_options(&self.cart.subtotal(), &self.config.pricing)
    }

    /// Amount left before free standard shipping, `None` for an empty cart.
    pub fn free_shipping_remaining(&self) -> Option<Money> {
        if self.cart.is_empty() {
            return None;
        }
        free_shipping_remaining(&self.cart.subtotal(), &self.config.pricing)
    }

    // Navigation

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigate(&mut self, page: Page) {
        self.navigation.navigate(page);
    }

    /// Navigate by page identifier; unknown identifiers show the home page.
    pub fn navigate_to(&mut self, page_id: &str) {
        self.navigation.navigate(Page::from_id_or_home(page_id));
    }

    /// Select a catalog product and open its detail page.
    pub fn select_product(&mut self, product_id: &str) -> Result<(), CommerceError> {
        let product = self.catalog.find(product_id)?.clone();
        self.navigation.select_product_and_navigate(product);
        Ok(())
    }

    pub fn view(&self) -> PageView<'_> {
        self.navigation.view()
    }

    // Checkout

    pub fn checkout(&self) -> &CheckoutSession {
        &self.checkout
    }

    pub fn checkout_mut(&mut self) -> &mut CheckoutSession {
        &mut self.checkout
    }

    /// Open the checkout page with a fresh session.
    ///
    /// Keeps the shipping method picked on the cart page.
    pub fn begin_checkout(&mut self) -> Result<(), CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        if self.checkout.is_processing() {
            return Err(CommerceError::PaymentInProgress);
        }
        let shipping = self.checkout.shipping_method();
        self.checkout = CheckoutSession::new();
        self.checkout.select_shipping(shipping);
        self.navigation.navigate(Page::Checkout);
        Ok(())
    }

    /// Pay, then clear the cart and show the order confirmation.
    pub async fn submit_order(&mut self) -> Result<&OrderConfirmation, CommerceError> {
        self.checkout.ensure_submittable(self.cart.items().len())?;

        let order = PlacedOrder {
            lines: self.cart.items().to_vec(),
            totals: self.totals(),
            shipping_method: self.checkout.shipping_method(),
            payment_method: self.checkout.payment_method(),
            shipping_info: self.checkout.shipping_info().clone(),
        };
        let confirmation = self.checkout.submit(order, &self.config.checkout).await?;

        self.cart.clear();
        self.promo.remove();
        self.navigation.navigate(Page::OrderConfirmation);
        Ok(self.last_order.insert(confirmation))
    }

    /// The order placed in this session, if any.
    pub fn last_order(&self) -> Option<&OrderConfirmation> {
        self.last_order.as_ref()
    }
}
