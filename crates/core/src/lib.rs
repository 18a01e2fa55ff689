//! Trolley Core - Commerce business rules library.
//!
//! This crate contains the pure domain logic for customer registration and
//! shopping carts: validation, duplicate detection, and cart arithmetic.
//! Persistence and notification are abstracted behind traits that callers
//! implement - no I/O, no database access, no HTTP clients live here.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails
//! - [`customer`] - Customer registration use case and its collaborator traits
//! - [`cart`] - In-memory shopping cart aggregate

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod customer;
pub mod types;

pub use types::*;
