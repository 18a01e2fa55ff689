//! Catalog product as seen by the cart.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A product offered for sale.
///
/// Carts key their lines by [`ProductId`] alone; name and unit price are
/// the snapshot taken when the product was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price for a quantity of one. Assumed non-negative.
    pub unit_price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
        }
    }
}
