//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use glow_commerce::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::stars;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List {
            category,
            brand,
            min_price,
            max_price,
            min_rating,
            in_stock,
            sort,
        } => {
            let category = category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()?;
            let mut filters = ListingFilters::for_category(category);
            for name in &brand {
                filters.set_brand(name, true);
            }
            filters.price_min = parse_price(&min_price)?;
            filters.price_max = parse_price(&max_price)?;
            filters.min_rating = min_rating;
            filters.in_stock_only = in_stock;
            list_products(category, &filters, sort.parse()?, ctx)
        }
        CatalogCommand::Show { id } => show_product(&id, ctx),
        CatalogCommand::Home => show_home(ctx),
    }
}

fn parse_price(value: &str) -> Result<Decimal> {
    value
        .parse()
        .with_context(|| format!("Invalid price: {}", value))
}

fn list_products(
    category: Option<Category>,
    filters: &ListingFilters,
    sort: SortOption,
    ctx: &Context,
) -> Result<()> {
    let mut store = ctx.storefront()?;
    store.navigate(Page::Category(category));

    let products = store.catalog().listing(filters, sort);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    let title = category.map_or("All Products", |c| c.display_name());
    ctx.output.header(title);
    ctx.output.info(&format!(
        "{} products, sorted by {}",
        products.len(),
        sort.display_name()
    ));

    if products.is_empty() {
        ctx.output.warn("No products match your filters");
        return Ok(());
    }

    let widths = [4, 28, 16, 10, 16];
    ctx.output
        .table_row(&["ID", "NAME", "BRAND", "PRICE", "RATING"], &widths);
    for product in products {
        let mut name = product.name.clone();
        if !product.in_stock {
            name.push_str(" (sold out)");
        }
        let rating = format!("{:.1} ({})", product.rating, product.review_count);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &name,
                &product.brand,
                &product.price.display(),
                &rating,
            ],
            &widths,
        );
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductPage<'a> {
    product: &'a Product,
    savings_percent: Option<u32>,
    reviews: &'a [Review],
    related: Vec<&'a Product>,
}

fn show_product(id: &str, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    store.select_product(id)?;

    let PageView::ProductDetail(product) = store.view() else {
        anyhow::bail!("Product not found");
    };
    let catalog = store.catalog();
    let page = ProductPage {
        product,
        savings_percent: product.savings_percent(),
        reviews: catalog.reviews_for(product),
        related: catalog.related(product),
    };

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Brand", &product.brand);
    ctx.output.kv("Category", product.category.display_name());
    let mut price = product.price.display();
    if let (Some(original), Some(percent)) = (product.original_price, page.savings_percent) {
        price = format!("{} (was {}, save {}%)", price, original.display(), percent);
    }
    ctx.output.kv("Price", &price);
    ctx.output.kv(
        "Rating",
        &format!("{} ({} reviews)", stars(product.rating), product.review_count),
    );
    ctx.output.kv(
        "Availability",
        if product.in_stock { "In stock" } else { "Out of stock" },
    );
    if !product.variants.shades.is_empty() {
        ctx.output.kv("Shades", &product.variants.shades.join(", "));
    }
    if !product.variants.sizes.is_empty() {
        ctx.output.kv("Sizes", &product.variants.sizes.join(", "));
    }

    ctx.output.header("Description");
    ctx.output.info(&product.description);

    if !product.benefits.is_empty() {
        ctx.output.header("Benefits");
        for benefit in &product.benefits {
            ctx.output.list_item(benefit);
        }
    }

    if !product.ingredients.is_empty() {
        ctx.output.header("Key Ingredients");
        ctx.output.info(&product.ingredients.join(", "));
    }

    ctx.output.header("Reviews");
    for review in page.reviews {
        let verified = if review.verified { " (verified)" } else { "" };
        ctx.output.list_item(&format!(
            "{} {}{} on {}",
            review.stars(),
            review.user_name,
            verified,
            review.date
        ));
        ctx.output.info(&review.comment);
    }

    if !page.related.is_empty() {
        ctx.output.header("You May Also Like");
        for related in &page.related {
            ctx.output.list_item(&format!(
                "[{}] {} - {}",
                related.id,
                related.name,
                related.price.display()
            ));
        }
    }

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HomePage<'a> {
    categories: &'a [CategorySummary],
    trending: Vec<&'a Product>,
    new_arrivals: Vec<&'a Product>,
}

fn show_home(ctx: &Context) -> Result<()> {
    let catalog = Catalog::demo();
    let page = HomePage {
        categories: catalog.categories(),
        trending: catalog.trending(),
        new_arrivals: catalog.new_arrivals(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.header("Shop by Category");
    for summary in page.categories {
        ctx.output.list_item(&format!(
            "{} ({} products)",
            summary.name, summary.product_count
        ));
    }

    for (title, products) in [
        ("Trending Now", &page.trending),
        ("New Arrivals", &page.new_arrivals),
    ] {
        ctx.output.header(title);
        for product in products {
            ctx.output.list_item(&format!(
                "[{}] {} by {} - {}",
                product.id,
                product.name,
                product.brand,
                product.price.display()
            ));
        }
    }

    Ok(())
}
