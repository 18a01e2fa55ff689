//! Shopping cart error types.

use thiserror::Error;

use crate::types::ProductId;

/// Errors that can occur when operating on a [`ShoppingCart`](super::ShoppingCart).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// No product was supplied to add.
    #[error("missing product")]
    MissingProduct,

    /// The requested quantity is zero or negative.
    #[error("{quantity} is not a valid quantity")]
    InvalidQuantity {
        /// The offending quantity.
        quantity: i64,
    },

    /// Merging would push the line quantity past what an i64 can hold.
    #[error("quantity for product id {product_id} would overflow")]
    QuantityOverflow {
        /// Product whose line would overflow.
        product_id: ProductId,
    },

    /// The cart holds no line for this product.
    #[error("product id {product_id} is not in the cart")]
    ProductNotInCart {
        /// Product that was asked to be removed.
        product_id: ProductId,
    },
}
