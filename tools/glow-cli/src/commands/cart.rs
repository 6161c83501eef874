//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use glow_cache::KvStore;
use glow_commerce::prelude::*;
use serde::Serialize;

use super::{apply_promo, CartArgs, CartCommand, VariantArgs};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let command = args.command.unwrap_or(CartCommand::Show {
        promo: None,
        shipping: ShippingMethod::default().as_str().to_string(),
    });

    match command {
        CartCommand::Show { promo, shipping } => show_cart(promo.as_deref(), &shipping, ctx),
        CartCommand::Add {
            id,
            quantity,
            variant,
        } => add_item(&id, quantity, &variant, ctx),
        CartCommand::Remove { id, variant } => remove_item(&id, &variant, ctx),
        CartCommand::Update {
            id,
            quantity,
            variant,
        } => update_item(&id, quantity, &variant, ctx),
        CartCommand::Clear { yes } => clear_cart(yes, ctx),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartPage<'a> {
    items: &'a [CartLine],
    item_count: u32,
    promo: Option<&'a AppliedPromo>,
    shipping_method: ShippingMethod,
    totals: OrderTotals,
    free_shipping_remaining: Option<Money>,
    shipping_options: Vec<ShippingOption>,
}

fn show_cart(promo: Option<&str>, shipping: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    store.navigate(Page::Cart);
    store.select_shipping(shipping.parse()?);
    apply_promo(&mut store, promo);

    print_cart(&store, ctx);
    Ok(())
}

fn print_cart<S: KvStore>(store: &Storefront<S>, ctx: &Context) {
    let totals = store.totals().rounded();

    if ctx.output.is_json() {
        ctx.output.json(&CartPage {
            items: store.cart().items(),
            item_count: store.cart().item_count(),
            promo: store.applied_promo(),
            shipping_method: store.shipping_method(),
            totals,
            free_shipping_remaining: store.free_shipping_remaining().map(|m| m.rounded()),
            shipping_options: store.shipping_options(),
        });
        return;
    }

    ctx.output
        .header(&format!("Shopping Cart ({} items)", store.cart().item_count()));

    if store.cart().is_empty() {
        ctx.output.info("Your cart is empty");
        ctx.output
            .info("Add products with `glow cart add <id>`; browse with `glow catalog list`");
        return;
    }

    let widths = [4, 28, 24, 5, 10];
    ctx.output
        .table_row(&["ID", "PRODUCT", "VARIANT", "QTY", "TOTAL"], &widths);
    for line in store.cart().items() {
        let variant = line
            .selected_variant
            .as_ref()
            .map(Variant::label)
            .unwrap_or_default();
        ctx.output.table_row(
            &[
                line.product_id.as_str(),
                &line.product.name,
                &variant,
                &line.quantity.to_string(),
                &line.line_total().display(),
            ],
            &widths,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    if let Some(promo) = store.applied_promo() {
        ctx.output.kv(
            &format!("Discount ({} {}%)", promo.code, promo.percent),
            &format!("-{}", totals.discount.display()),
        );
    }
    let shipping = if totals.shipping.is_zero() {
        "FREE".to_string()
    } else {
        totals.shipping.display()
    };
    ctx.output.kv(
        &format!("Shipping ({})", store.shipping_method().display_name()),
        &shipping,
    );
    ctx.output.kv("Tax", &totals.tax.display());
    ctx.output.kv("Total", &totals.total.display());

    if let Some(remaining) = store.free_shipping_remaining() {
        ctx.output.info(&format!(
            "Add {} more for free standard shipping",
            remaining.display()
        ));
    }

    ctx.output.header("Shipping Options");
    for option in store.shipping_options() {
        let price = if option.is_free() {
            "FREE".to_string()
        } else {
            option.price.display()
        };
        ctx.output
            .list_item(&format!("{} ({}) {}", option.name, option.estimate, price));
    }
}

fn add_item(id: &str, quantity: u32, variant: &VariantArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    // Same defaults as the product page: first shade and size preselected.
    let mut selection = ProductSelection::new(store.catalog().find(id)?.clone());
    if let Some(ref shade) = variant.shade {
        selection.select_shade(shade)?;
    }
    if let Some(ref size) = variant.size {
        selection.select_size(size)?;
    }
    selection.set_quantity(quantity);

    if !selection.product().in_stock {
        bail!("{} is out of stock", selection.product().name);
    }

    store.add_product(selection.product(), selection.quantity(), selection.variant());

    let label = selection
        .variant()
        .map(|v| format!(" ({})", v.label()))
        .unwrap_or_default();
    ctx.output.success(&format!(
        "Added {} x {}{} to cart",
        selection.quantity(),
        selection.product().name,
        label
    ));
    print_cart(&store, ctx);

    Ok(())
}

fn has_line<S: KvStore>(
    store: &Storefront<S>,
    product_id: &ProductId,
    variant: Option<&Variant>,
) -> bool {
    store
        .cart()
        .items()
        .iter()
        .any(|line| line.matches(product_id, variant))
}

fn describe(product_id: &ProductId, variant: Option<&Variant>) -> String {
    match variant {
        Some(v) => format!("Product {} ({})", product_id, v.label()),
        None => format!("Product {}", product_id),
    }
}

/// Remove a line; returns whether one was in the cart.
fn remove_line<S: KvStore>(
    store: &mut Storefront<S>,
    product_id: &ProductId,
    variant: Option<&Variant>,
) -> bool {
    let found = has_line(store, product_id, variant);
    store.remove_from_cart(product_id, variant);
    found
}

/// Set a line's quantity; returns whether the line was in the cart.
fn update_line<S: KvStore>(
    store: &mut Storefront<S>,
    product_id: &ProductId,
    quantity: i64,
    variant: Option<&Variant>,
) -> bool {
    let found = has_line(store, product_id, variant);
    store.update_quantity(product_id, quantity, variant);
    found
}

fn remove_item(id: &str, variant: &VariantArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let product_id = ProductId::new(id);
    let variant = variant.variant();
    let label = describe(&product_id, variant.as_ref());

    if remove_line(&mut store, &product_id, variant.as_ref()) {
        ctx.output.success(&format!("Removed {} from cart", label));
    } else {
        ctx.output.info(&format!("{} is not in the cart", label));
    }
    print_cart(&store, ctx);

    Ok(())
}

fn update_item(id: &str, quantity: i64, variant: &VariantArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let product_id = ProductId::new(id);
    let variant = variant.variant();
    let label = describe(&product_id, variant.as_ref());

    if !update_line(&mut store, &product_id, quantity, variant.as_ref()) {
        ctx.output.info(&format!("{} is not in the cart", label));
    } else if quantity <= 0 {
        ctx.output.success(&format!("Removed {} from cart", label));
    } else {
        ctx.output
            .success(&format!("Set {} quantity to {}", label, quantity));
    }
    print_cart(&store, ctx);

    Ok(())
}

fn clear_cart(yes: bool, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    if store.cart().is_empty() {
        ctx.output.info("Cart is already empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} items from the cart?",
                store.cart().item_count()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    store.clear_cart();
    ctx.output.success("Cart cleared");

    Ok(())
}
