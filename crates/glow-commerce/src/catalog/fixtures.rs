//! Built-in demo catalog.
//!
//! Read-only inputs: nothing in the crate mutates these records after they
//! are built.

use crate::catalog::{Category, Product, Review, VariantOptions};
use crate::ids::{ProductId, ReviewId, UserId};
use crate::money::{Currency, Money};
use chrono::NaiveDate;
use serde::Serialize;

const SERUM_IMAGE: &str = "https://images.unsplash.com/photo-1585232350744-974fc9804d65";
const COSMETICS_IMAGE: &str = "https://images.unsplash.com/photo-1643379850623-7eb6442cd262";
const LIPSTICK_IMAGE: &str = "https://images.unsplash.com/photo-1584013544027-acfe4d8ca478";
const HAIRCARE_IMAGE: &str = "https://images.unsplash.com/photo-1631729371254-42c2892f0e6e";

/// Category tile on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub name: &'static str,
    /// Advertised size of the full range, not the demo catalog.
    pub product_count: u32,
}

fn usd(cents: i64) -> Money {
    Money::from_cents(cents, Currency::USD)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The six demo products.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Hydrating Vitamin C Serum".to_string(),
            brand: "GlowLab".to_string(),
            category: Category::Skincare,
            price: usd(2999),
            original_price: Some(usd(3999)),
            rating: 4.5,
            review_count: 128,
            images: strings(&[SERUM_IMAGE, COSMETICS_IMAGE]),
            description: "A powerful vitamin C serum that brightens skin and reduces dark spots \
                          with hyaluronic acid for hydration."
                .to_string(),
            ingredients: strings(&[
                "Vitamin C (L-Ascorbic Acid)",
                "Hyaluronic Acid",
                "Vitamin E",
                "Ferulic Acid",
            ]),
            benefits: strings(&[
                "Brightens skin tone",
                "Reduces dark spots",
                "Hydrates and plumps",
                "Antioxidant protection",
            ]),
            variants: VariantOptions {
                shades: vec![],
                sizes: strings(&["15ml", "30ml", "50ml"]),
            },
            in_stock: true,
            is_new: true,
            is_trending: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Matte Liquid Lipstick".to_string(),
            brand: "VelvetKiss".to_string(),
            category: Category::Makeup,
            price: usd(1899),
            original_price: None,
            rating: 4.3,
            review_count: 89,
            images: strings(&[LIPSTICK_IMAGE]),
            description: "Long-lasting matte liquid lipstick with intense color payoff that \
                          stays put all day."
                .to_string(),
            ingredients: vec![],
            benefits: strings(&[
                "Long-lasting wear",
                "Intense color",
                "Matte finish",
                "Non-drying formula",
            ]),
            variants: VariantOptions {
                shades: strings(&[
                    "Ruby Red",
                    "Nude Pink",
                    "Coral Sunset",
                    "Berry Crush",
                    "Classic Red",
                ]),
                sizes: vec![],
            },
            in_stock: true,
            is_new: false,
            is_trending: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Nourishing Hair Mask".to_string(),
            brand: "SilkStrands".to_string(),
            category: Category::Haircare,
            price: usd(2499),
            original_price: None,
            rating: 4.7,
            review_count: 156,
            images: strings(&[HAIRCARE_IMAGE]),
            description: "Deep conditioning hair mask with argan oil and keratin for damaged \
                          and dry hair."
                .to_string(),
            ingredients: strings(&["Argan Oil", "Keratin", "Shea Butter", "Coconut Oil"]),
            benefits: strings(&[
                "Deep conditioning",
                "Repairs damage",
                "Adds shine",
                "Reduces frizz",
            ]),
            variants: VariantOptions {
                shades: vec![],
                sizes: strings(&["200ml", "500ml"]),
            },
            in_stock: true,
            is_new: true,
            is_trending: false,
        },
        Product {
            id: ProductId::new("4"),
            name: "Glow Foundation".to_string(),
            brand: "LuminousBeauty".to_string(),
            category: Category::Makeup,
            price: usd(3299),
            original_price: None,
            rating: 4.4,
            review_count: 203,
            images: strings(&[COSMETICS_IMAGE]),
            description: "Buildable coverage foundation with a natural glow finish and SPF 30 \
                          protection."
                .to_string(),
            ingredients: vec![],
            benefits: strings(&[
                "Buildable coverage",
                "Natural glow",
                "SPF 30 protection",
                "Long-wearing",
            ]),
            variants: VariantOptions {
                shades: strings(&["Porcelain", "Light", "Medium", "Tan", "Deep"]),
                sizes: vec![],
            },
            in_stock: true,
            is_new: false,
            is_trending: true,
        },
        Product {
            id: ProductId::new("5"),
            name: "Retinol Night Serum".to_string(),
            brand: "SkinRenew".to_string(),
            category: Category::Skincare,
            price: usd(4599),
            original_price: Some(usd(5599)),
            rating: 4.6,
            review_count: 97,
            images: strings(&[SERUM_IMAGE]),
            description: "Gentle retinol serum for evening use to reduce fine lines and \
                          improve skin texture."
                .to_string(),
            ingredients: strings(&["Retinol", "Niacinamide", "Hyaluronic Acid", "Squalane"]),
            benefits: strings(&[
                "Reduces fine lines",
                "Improves texture",
                "Evens skin tone",
                "Anti-aging",
            ]),
            variants: VariantOptions {
                shades: vec![],
                sizes: strings(&["15ml", "30ml"]),
            },
            in_stock: true,
            is_new: true,
            is_trending: false,
        },
        Product {
            id: ProductId::new("6"),
            name: "Volumizing Mascara".to_string(),
            brand: "LashLift".to_string(),
            category: Category::Makeup,
            price: usd(2299),
            original_price: None,
            rating: 4.2,
            review_count: 134,
            images: strings(&[LIPSTICK_IMAGE]),
            description: "Dramatic volume and length mascara that lifts and separates lashes \
                          without clumping."
                .to_string(),
            ingredients: vec![],
            benefits: strings(&[
                "Dramatic volume",
                "Length enhancement",
                "No clumping",
                "Waterproof formula",
            ]),
            variants: VariantOptions {
                shades: strings(&["Black", "Brown", "Blue"]),
                sizes: vec![],
            },
            in_stock: true,
            is_new: false,
            is_trending: false,
        },
    ]
}

fn review(id: &str, user: &str, name: &str, rating: u8, comment: &str, day: u32) -> Review {
    Review {
        id: ReviewId::new(id),
        user_id: UserId::new(user),
        user_name: name.to_string(),
        rating,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
        verified: true,
    }
}

/// Demo reviews.
pub fn reviews() -> Vec<Review> {
    vec![
        review(
            "1",
            "1",
            "Sarah M.",
            5,
            "This serum has completely transformed my skin! I noticed brighter, more even \
             skin tone within just 2 weeks.",
            15,
        ),
        review(
            "2",
            "2",
            "Emma K.",
            4,
            "Great product, love the texture and how it absorbs quickly. The vitamin C \
             really works!",
            10,
        ),
        review(
            "3",
            "3",
            "Lisa R.",
            5,
            "Best lipstick I've ever used! The color is gorgeous and it truly lasts all day.",
            12,
        ),
    ]
}

/// Category tiles.
pub fn categories() -> Vec<CategorySummary> {
    [
        (Category::Skincare, 150),
        (Category::Makeup, 200),
        (Category::Haircare, 80),
        (Category::Fragrance, 45),
    ]
    .into_iter()
    .map(|(category, product_count)| CategorySummary {
        category,
        name: category.display_name(),
        product_count,
    })
    .collect()
}
