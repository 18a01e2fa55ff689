//! Shopping cart line items.

use serde::{Deserialize, Serialize};

use super::{CartError, Product};
use crate::types::Price;

/// One line of a shopping cart: a product and how many units of it.
///
/// Quantity is always positive. The cart maintains this by validating
/// every add and folding repeat adds into the existing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCartItem {
    product: Product,
    quantity: i64,
}

impl ShoppingCartItem {
    pub(crate) const fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// The product this line is for.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// How many units of the product this line holds.
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.product.unit_price * self.quantity
    }

    /// Fold an additional quantity into this line.
    ///
    /// The line is untouched if the combined quantity would overflow.
    pub(crate) fn merge(&mut self, quantity: i64) -> Result<(), CartError> {
        self.quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or(CartError::QuantityOverflow {
                product_id: self.product.id,
            })?;
        Ok(())
    }
}
