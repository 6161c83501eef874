//! Detail-page selection state.

use crate::cart::Variant;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::Money;

/// Shade, size, and quantity picked on a product page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSelection {
    product: Product,
    shade: Option<String>,
    size: Option<String>,
    quantity: u32,
}

impl ProductSelection {
    /// Start with the first shade and size offered and a quantity of 1.
    pub fn new(product: Product) -> Self {
        let shade = product.variants.shades.first().cloned();
        let size = product.variants.sizes.first().cloned();
        Self {
            product,
            shade,
            size,
            quantity: 1,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn shade(&self) -> Option<&str> {
        self.shade.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn select_shade(&mut self, shade: &str) -> Result<(), CommerceError> {
        self.shade = Some(self.offered("shade", &self.product.variants.shades, shade)?);
        Ok(())
    }

    pub fn select_size(&mut self, size: &str) -> Result<(), CommerceError> {
        self.size = Some(self.offered("size", &self.product.variants.sizes, size)?);
        Ok(())
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrease the quantity, stopping at 1.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// Set the quantity, clamped to at least 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    /// Variant to add to the cart, `None` for products without options.
    pub fn variant(&self) -> Option<Variant> {
        Variant::from_selection(self.shade.clone(), self.size.clone())
    }

    /// Price of the current quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }

    fn offered(
        &self,
        kind: &'static str,
        options: &[String],
        value: &str,
    ) -> Result<String, CommerceError> {
        options
            .iter()
            .find(|o| o.as_str() == value)
            .cloned()
            .ok_or_else(|| CommerceError::UnknownVariantOption {
                product: self.product.id.to_string(),
                kind,
                value: value.to_string(),
            })
    }
}
