//! In-memory shopping cart.
//!
//! [`ShoppingCart`] keeps one line per product id, folds repeat adds into
//! the existing line, and derives its total from line subtotals on every
//! call. It has no collaborators; everything happens in memory.

mod error;
mod item;
mod product;

pub use error::CartError;
pub use item::ShoppingCartItem;
pub use product::Product;

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// An in-memory shopping cart.
///
/// Lines are unique by product id and kept in first-add order. Re-adding
/// a product merges quantities into the existing line instead of
/// appending a second one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCart {
    items: Vec<ShoppingCartItem>,
}

impl ShoppingCart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// If the cart already holds a line for the same product id, the
    /// quantities are merged into that line and the incoming product
    /// snapshot is dropped. Otherwise a new line is appended after the
    /// existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingProduct`] if no product is given,
    /// [`CartError::InvalidQuantity`] if `quantity` is zero or negative,
    /// or [`CartError::QuantityOverflow`] if merging would overflow the
    /// line quantity. The cart is unchanged on every error.
    pub fn add(&mut self, product: Option<Product>, quantity: i64) -> Result<(), CartError> {
        let Some(product) = product else {
            return Err(CartError::MissingProduct);
        };

        if quantity <= 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product().id == product.id)
        {
            item.merge(quantity)?;
        } else {
            self.items.push(ShoppingCartItem::new(product, quantity));
        }

        Ok(())
    }

    /// Remove a product's line entirely, regardless of its quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotInCart`] if no line matches.
    pub fn remove(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|item| item.product().id == product_id)
            .ok_or(CartError::ProductNotInCart { product_id })?;

        self.items.remove(position);
        Ok(())
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The cart's lines, in first-add order.
    #[must_use]
    pub fn items(&self) -> &[ShoppingCartItem] {
        &self.items
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line subtotals, recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(ShoppingCartItem::subtotal).sum()
    }
}
