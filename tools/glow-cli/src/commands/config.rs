//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    let config = &ctx.config;

    ctx.output.info("[pricing]");
    ctx.output.kv("tax_rate", &config.pricing.tax_rate.to_string());
    ctx.output
        .kv("standard_shipping", &config.pricing.standard_shipping.to_string());
    ctx.output
        .kv("express_shipping", &config.pricing.express_shipping.to_string());
    ctx.output.kv(
        "free_shipping_threshold",
        &config.pricing.free_shipping_threshold.to_string(),
    );
    ctx.output.kv("currency", config.pricing.currency.code());

    ctx.output.info("[promo.codes]");
    for (code, percent) in &config.promo.codes {
        ctx.output.kv(code, &format!("{}%", percent));
    }

    ctx.output.info("[checkout]");
    ctx.output.kv(
        "payment_delay_ms",
        &config.checkout.payment_delay_ms.to_string(),
    );
    ctx.output.kv(
        "estimated_delivery_days",
        &config.checkout.estimated_delivery_days.to_string(),
    );

    ctx.output.info("[storage]");
    ctx.output
        .kv("data_dir", &ctx.data_dir().display().to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
