//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;

use clap::{Args, Subcommand};
use glow_cache::KvStore;
use glow_commerce::cart::Variant;
use glow_commerce::Storefront;

/// Apply a promo code when one is given. Unknown codes are ignored.
pub fn apply_promo<S: KvStore>(store: &mut Storefront<S>, code: Option<&str>) {
    if let Some(code) = code {
        store.apply_promo(code);
    }
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products with filters.
    List {
        /// Category slug (skincare, makeup, haircare, fragrance).
        #[arg(short, long)]
        category: Option<String>,

        /// Brand filter, repeatable.
        #[arg(short, long)]
        brand: Vec<String>,

        /// Minimum price.
        #[arg(long, default_value = "0")]
        min_price: String,

        /// Maximum price.
        #[arg(long, default_value = "100")]
        max_price: String,

        /// Minimum average rating.
        #[arg(long, default_value = "0")]
        min_rating: f32,

        /// Hide out-of-stock products.
        #[arg(long)]
        in_stock: bool,

        /// Sort order (popular, price-low, price-high, rating, newest).
        #[arg(short, long, default_value = "popular")]
        sort: String,
    },
    /// Show a product page.
    Show {
        /// Product ID.
        id: String,
    },
    /// Show the home page rows.
    Home,
}

/// Shade and size flags identifying a cart line.
#[derive(Args, Clone, Default)]
pub struct VariantArgs {
    /// Shade name.
    #[arg(long)]
    pub shade: Option<String>,

    /// Size name.
    #[arg(long)]
    pub size: Option<String>,
}

impl VariantArgs {
    /// Variant from the flags, `None` when neither is given.
    pub fn variant(&self) -> Option<Variant> {
        Variant::from_selection(self.shade.clone(), self.size.clone())
    }
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with totals.
    Show {
        /// Promo code to preview.
        #[arg(short, long)]
        promo: Option<String>,

        /// Shipping method (standard, express).
        #[arg(long, default_value = "standard")]
        shipping: String,
    },
    /// Add a product.
    Add {
        /// Product ID.
        id: String,

        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        #[command(flatten)]
        variant: VariantArgs,
    },
    /// Remove a line.
    Remove {
        /// Product ID.
        id: String,

        #[command(flatten)]
        variant: VariantArgs,
    },
    /// Set a line's quantity; 0 removes it.
    Update {
        /// Product ID.
        id: String,

        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        #[command(flatten)]
        variant: VariantArgs,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Contact email.
    #[arg(long)]
    pub email: String,

    /// First name.
    #[arg(long)]
    pub first_name: String,

    /// Last name.
    #[arg(long)]
    pub last_name: String,

    /// Street address.
    #[arg(long)]
    pub address: String,

    /// Apartment, suite, etc.
    #[arg(long, default_value = "")]
    pub apartment: String,

    /// City.
    #[arg(long)]
    pub city: String,

    /// State.
    #[arg(long)]
    pub state: String,

    /// ZIP code.
    #[arg(long)]
    pub zip: String,

    /// Country code.
    #[arg(long, default_value = "US")]
    pub country: String,

    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Shipping method (standard, express).
    #[arg(long, default_value = "standard")]
    pub shipping: String,

    /// Payment method (card, paypal).
    #[arg(long, default_value = "card")]
    pub payment: String,

    /// Promo code.
    #[arg(long)]
    pub promo: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: Option<AccountCommand>,
}

#[derive(Subcommand, Clone, Copy)]
pub enum AccountCommand {
    /// Show the profile.
    Profile,
    /// Show order history.
    Orders,
    /// Show saved addresses.
    Addresses,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
