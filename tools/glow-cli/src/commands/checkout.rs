//! Checkout command.

use anyhow::Result;
use dialoguer::Confirm;
use glow_cache::KvStore;
use glow_commerce::prelude::*;

use super::{apply_promo, CheckoutArgs};
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let yes = args.yes;

    prepare(&mut store, args)?;
    ctx.output.step(1, 3, CheckoutStep::Shipping.display_name());
    ctx.output.step(2, 3, CheckoutStep::Payment.display_name());

    let shipping = store.shipping_method();
    let payment = store.checkout().payment_method();
    let totals = store.totals().rounded();
    if !ctx.output.is_json() {
        ctx.output.kv("Ship to", &store.checkout().shipping_info().one_line());
        ctx.output.kv(
            "Shipping",
            &format!("{} ({})", shipping.display_name(), shipping.delivery_estimate()),
        );
        ctx.output.kv("Payment", payment.display_name());
        ctx.output.kv("Items", &store.cart().item_count().to_string());
        if totals.has_discount() {
            ctx.output
                .kv("Discount", &format!("-{}", totals.discount.display()));
        }
        ctx.output.kv("Total", &totals.total.display());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", totals.total.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.info("Checkout cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Processing payment...");
    let result = store.submit_order().await;
    spinner.finish_and_clear();
    let confirmation = result?.clone();

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.step(3, 3, CheckoutStep::Complete.display_name());
    print_confirmation(&confirmation, ctx);

    Ok(())
}

/// Fill in the shipping step and advance to payment.
fn prepare<S: KvStore>(store: &mut Storefront<S>, args: CheckoutArgs) -> Result<()> {
    let shipping: ShippingMethod = args.shipping.parse()?;
    let payment: PaymentMethod = args.payment.parse()?;
    apply_promo(store, args.promo.as_deref());

    store.select_shipping(shipping);
    store.begin_checkout()?;

    let info = ShippingInfo {
        email: args.email,
        first_name: args.first_name,
        last_name: args.last_name,
        address: args.address,
        apartment: args.apartment,
        city: args.city,
        state: args.state,
        zip_code: args.zip,
        country: args.country,
        phone: args.phone,
    };
    store.checkout_mut().set_shipping_info(info);
    store.checkout_mut().continue_to_payment()?;
    store.checkout_mut().select_payment(payment);
    Ok(())
}

fn print_confirmation(order: &OrderConfirmation, ctx: &Context) {
    ctx.output.success("Order placed. Thank you for your purchase!");
    if !order.shipping_info.email.is_empty() {
        ctx.output.info(&format!(
            "A confirmation email has been sent to {}",
            order.shipping_info.email
        ));
    }

    ctx.output.header("Order Details");
    ctx.output.kv("Order number", order.order_number.as_str());
    ctx.output.kv("Order date", &order.order_date.format("%B %-d, %Y").to_string());
    ctx.output.kv(
        "Estimated delivery",
        &order.estimated_delivery.format("%B %-d, %Y").to_string(),
    );
    ctx.output.kv("Tracking number", &order.tracking_number);
    ctx.output.kv("Payment", order.payment_method.display_name());

    ctx.output.header("Shipping Address");
    for line in order.shipping_info.multi_line() {
        ctx.output.list_item(&line);
    }

    ctx.output.header(&format!("Items ({})", order.item_count()));
    for line in &order.lines {
        let variant = line
            .selected_variant
            .as_ref()
            .map(|v| format!(" ({})", v.label()))
            .unwrap_or_default();
        ctx.output.list_item(&format!(
            "{} x {}{} - {}",
            line.quantity,
            line.product.name,
            variant,
            line.line_total().display()
        ));
    }

    let totals = order.totals.rounded();
    ctx.output.header("Summary");
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    if totals.has_discount() {
        ctx.output
            .kv("Discount", &format!("-{}", totals.discount.display()));
    }
    ctx.output.kv(
        &format!("Shipping ({})", order.shipping_method.display_name()),
        &totals.shipping.display(),
    );
    ctx.output.kv("Tax", &totals.tax.display());
    ctx.output.kv("Total", &totals.total.display());
}
