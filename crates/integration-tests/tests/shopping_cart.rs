//! End-to-end scenarios for the shopping cart.
//!
//! Walks the cart through the grocer's catalog fixtures: adding, merging,
//! removing, clearing, and totalling line items.

#![allow(clippy::unwrap_used)]

use trolley_integration_tests::{apple, banana, donut};

use rust_decimal::Decimal;
use trolley_core::cart::{CartError, ShoppingCart};
use trolley_core::{Price, ProductId};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_cart_has_zero_total() {
    let cart = ShoppingCart::new();
    assert_eq!(cart.total(), Price::zero());
}

#[test]
fn test_new_cart_is_empty() {
    let cart = ShoppingCart::new();
    assert!(cart.items().is_empty());
}

// ============================================================================
// Adding items
// ============================================================================

#[test]
fn test_add_without_product_fails() {
    let mut cart = ShoppingCart::new();

    let err = cart.add(None, 3).unwrap_err();

    assert_eq!(err, CartError::MissingProduct);
    assert_eq!(err.to_string(), "missing product");
}

#[test]
fn test_add_with_non_positive_quantity_fails() {
    let mut cart = ShoppingCart::new();

    for quantity in [0, -2, -5, -100, -3000] {
        let err = cart.add(Some(apple()), quantity).unwrap_err();

        assert_eq!(err, CartError::InvalidQuantity { quantity });
        assert_eq!(err.to_string(), format!("{quantity} is not a valid quantity"));
    }
    assert!(cart.items().is_empty());
}

#[test]
fn test_add_puts_the_item_in_the_cart() {
    for (product, quantity) in [(apple(), 3), (banana(), 5), (donut(), 11)] {
        let mut cart = ShoppingCart::new();
        cart.add(Some(product.clone()), quantity).unwrap();

        assert_eq!(cart.items().len(), 1);
        let item = cart.items().first().unwrap();
        assert_eq!(item.product(), &product);
        assert_eq!(item.quantity(), quantity);
        assert_eq!(cart.total(), product.unit_price * quantity);
    }
}

#[test]
fn test_add_two_products_totals_their_subtotals() {
    let mut cart = ShoppingCart::new();
    cart.add(Some(apple()), 3).unwrap();
    cart.add(Some(banana()), 9).unwrap();

    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.total(), Price::new(Decimal::new(780, 2)));
}

#[test]
fn test_add_many_products_totals_their_subtotals() {
    let mut cart = ShoppingCart::new();
    cart.add(Some(apple()), 10).unwrap();
    cart.add(Some(banana()), 20).unwrap();
    cart.add(Some(donut()), 40).unwrap();

    assert_eq!(cart.items().len(), 3);
    assert_eq!(cart.total(), Price::new(Decimal::new(11850, 2)));
}

#[test]
fn test_add_same_product_twice_merges_into_one_item() {
    for product in [apple(), banana(), donut()] {
        let mut cart = ShoppingCart::new();
        cart.add(Some(product.clone()), 4).unwrap();
        cart.add(Some(product), 4).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items().first().unwrap().quantity(), 8);
    }
}

#[test]
fn test_add_merges_while_preserving_first_add_order() {
    let mut cart = ShoppingCart::new();
    cart.add(Some(donut()), 1).unwrap();
    cart.add(Some(apple()), 4).unwrap();
    cart.add(Some(banana()), 3).unwrap();
    cart.add(Some(apple()), 4).unwrap();
    cart.add(Some(banana()), 2).unwrap();

    let expected = [(donut(), 1), (apple(), 8), (banana(), 5)];
    assert_eq!(cart.items().len(), expected.len());
    for (item, (product, quantity)) in cart.items().iter().zip(&expected) {
        assert_eq!(item.product(), product);
        assert_eq!(item.quantity(), *quantity);
    }
}

// ============================================================================
// Removing and clearing
// ============================================================================

#[test]
fn test_remove_takes_the_whole_item_out() {
    let mut cart = ShoppingCart::new();
    cart.add(Some(apple()), 10).unwrap();
    cart.add(Some(banana()), 2).unwrap();
    cart.add(Some(apple()), 2).unwrap();

    cart.remove(apple().id).unwrap();

    assert_eq!(cart.items().len(), 1);
    let item = cart.items().first().unwrap();
    assert_eq!(item.product(), &banana());
    assert_eq!(item.quantity(), 2);
    assert_eq!(cart.total(), Price::new(Decimal::new(150, 2)));
}

#[test]
fn test_remove_missing_product_fails() {
    let mut cart = ShoppingCart::new();
    cart.add(Some(apple()), 10).unwrap();
    cart.add(Some(banana()), 2).unwrap();

    let err = cart.remove(ProductId::new(4)).unwrap_err();

    assert_eq!(
        err,
        CartError::ProductNotInCart {
            product_id: ProductId::new(4)
        }
    );
    assert_eq!(err.to_string(), "product id 4 is not in the cart");
    assert_eq!(cart.items().len(), 2);
}

#[test]
fn test_clear_empties_the_cart() {
    let mut cart = ShoppingCart::new();
    cart.add(Some(apple()), 10).unwrap();
    cart.add(Some(banana()), 2).unwrap();
    cart.add(Some(apple()), 2).unwrap();

    cart.clear();

    assert!(cart.items().is_empty());
    assert_eq!(cart.total(), Price::zero());
}
