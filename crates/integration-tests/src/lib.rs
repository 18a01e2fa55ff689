//! Shared support for Trolley integration tests.
//!
//! Provides call-recording implementations of the registration
//! collaborator traits, deliberately failing variants, and the product
//! fixtures the cart scenarios use.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;

use rust_decimal::Decimal;

use trolley_core::cart::Product;
use trolley_core::customer::{
    BoxError, Customer, CustomerIdSource, CustomerNotifier, CustomerRegistration,
    CustomerRepository,
};
use trolley_core::{CustomerId, Price, ProductId};

// =============================================================================
// Recording collaborators
// =============================================================================

/// Repository double that records every call.
///
/// An empty repository misses on every lookup; seed it with
/// [`with_existing`](Self::with_existing) to stage the duplicate case.
#[derive(Default)]
pub struct RecordingCustomerRepository {
    existing: Option<Customer>,
    lookups: RefCell<Vec<String>>,
    saved: RefCell<Vec<Customer>>,
}

impl RecordingCustomerRepository {
    /// Empty repository: every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository already holding `customer`, returned by every lookup.
    #[must_use]
    pub fn with_existing(customer: Customer) -> Self {
        Self {
            existing: Some(customer),
            ..Self::default()
        }
    }

    /// Email addresses the lookup was called with, in call order.
    #[must_use]
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    /// Customers passed to save, in call order.
    #[must_use]
    pub fn saved(&self) -> Vec<Customer> {
        self.saved.borrow().clone()
    }
}

impl CustomerRepository for RecordingCustomerRepository {
    fn customer_by_email(&self, email_address: &str) -> Result<Option<Customer>, BoxError> {
        self.lookups.borrow_mut().push(email_address.to_owned());
        Ok(self.existing.clone())
    }

    fn save_customer(&self, customer: &Customer) -> Result<(), BoxError> {
        self.saved.borrow_mut().push(customer.clone());
        Ok(())
    }
}

/// Notifier double that records every welcome message.
#[derive(Default)]
pub struct RecordingCustomerNotifier {
    welcomed: RefCell<Vec<Customer>>,
}

impl RecordingCustomerNotifier {
    /// Notifier that has sent nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Customers a welcome message was sent to, in call order.
    #[must_use]
    pub fn welcomed(&self) -> Vec<Customer> {
        self.welcomed.borrow().clone()
    }
}

impl CustomerNotifier for RecordingCustomerNotifier {
    fn send_welcome_message(&self, customer: &Customer) -> Result<(), BoxError> {
        self.welcomed.borrow_mut().push(customer.clone());
        Ok(())
    }
}

/// Id source that hands out a predetermined id.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdSource(CustomerId);

impl FixedIdSource {
    /// Source that always produces `id`.
    #[must_use]
    pub const fn new(id: CustomerId) -> Self {
        Self(id)
    }
}

impl CustomerIdSource for FixedIdSource {
    fn next_id(&self) -> CustomerId {
        self.0
    }
}

// =============================================================================
// Failing collaborators
// =============================================================================

/// Repository whose email lookup always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookupFailsRepository;

impl CustomerRepository for LookupFailsRepository {
    fn customer_by_email(&self, _email_address: &str) -> Result<Option<Customer>, BoxError> {
        Err("customer store unreachable".into())
    }

    fn save_customer(&self, _customer: &Customer) -> Result<(), BoxError> {
        Ok(())
    }
}

/// Repository whose lookup misses but whose save always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveFailsRepository;

impl CustomerRepository for SaveFailsRepository {
    fn customer_by_email(&self, _email_address: &str) -> Result<Option<Customer>, BoxError> {
        Ok(None)
    }

    fn save_customer(&self, _customer: &Customer) -> Result<(), BoxError> {
        Err("customer store rejected the write".into())
    }
}

/// Notifier that always fails to send.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingNotifier;

impl CustomerNotifier for FailingNotifier {
    fn send_welcome_message(&self, _customer: &Customer) -> Result<(), BoxError> {
        Err("mail gateway unreachable".into())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Apple at 0.35 per unit.
#[must_use]
pub fn apple() -> Product {
    Product::new(ProductId::new(1), "Apple", Price::new(Decimal::new(35, 2)))
}

/// Banana at 0.75 per unit.
#[must_use]
pub fn banana() -> Product {
    Product::new(ProductId::new(2), "Banana", Price::new(Decimal::new(75, 2)))
}

/// Donut at 2.50 per unit.
#[must_use]
pub fn donut() -> Product {
    Product::new(ProductId::new(3), "Donut", Price::new(Decimal::new(250, 2)))
}

/// A registration that passes every check.
#[must_use]
pub fn fred_registration() -> CustomerRegistration {
    CustomerRegistration::new("Fred", "Flintstone", "fred.flintstone@gmail.com")
}
