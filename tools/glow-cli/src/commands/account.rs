//! Account commands.

use anyhow::Result;
use glow_commerce::prelude::*;

use super::{AccountArgs, AccountCommand};
use crate::context::Context;
use crate::output::status_badge;

/// Run the account command.
pub async fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    store.navigate(Page::Account);
    let account = store.account();

    match args.command {
        Some(AccountCommand::Profile) => show_profile(account, ctx),
        Some(AccountCommand::Orders) => show_orders(account, ctx),
        Some(AccountCommand::Addresses) => show_addresses(account, ctx),
        None => {
            if ctx.output.is_json() {
                ctx.output.json(account);
                return Ok(());
            }
            show_profile(account, ctx);
            show_orders(account, ctx);
            show_addresses(account, ctx);
        }
    }

    Ok(())
}

fn show_profile(account: &Account, ctx: &Context) {
    let profile = &account.profile;
    if ctx.output.is_json() {
        ctx.output.json(profile);
        return;
    }

    ctx.output.header(&format!("{} ({})", profile.full_name(), profile.initials()));
    ctx.output.kv("Email", &profile.email);
    ctx.output.kv("Phone", &profile.phone);
    ctx.output
        .kv("Member since", &profile.join_date.format("%B %Y").to_string());
}

fn show_orders(account: &Account, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&account.orders);
        return;
    }

    ctx.output.header("Order History");
    if account.orders.is_empty() {
        ctx.output.info("No orders yet");
        return;
    }

    ctx.output.table_row(
        &["ORDER", "DATE", "STATUS", "ITEMS", "TOTAL"],
        &[10, 12, 12, 8, 10],
    );
    for order in &account.orders {
        let date = order.date.to_string();
        let items = order.item_count.to_string();
        let total = order.total.display();
        // Padded before styling: escape codes count toward the width.
        let status = format!("{:12}", order.status.display_name());
        ctx.output.table_row(
            &[order.id.as_str(), &date, &status_badge(&status), &items, &total],
            &[10, 12, 0, 8, 10],
        );
        if let Some(ref tracking) = order.tracking_number {
            ctx.output.kv("tracking", tracking);
        }
    }
}

fn show_addresses(account: &Account, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&account.addresses);
        return;
    }

    ctx.output.header("Saved Addresses");
    for address in &account.addresses {
        let default = if address.is_default { " (default)" } else { "" };
        ctx.output
            .list_item(&format!("{}{}: {}", address.name, default, address.one_line()));
    }
}
