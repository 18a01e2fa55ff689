//! Customer registration.
//!
//! A [`CustomerRegistration`] is what a prospective customer submits; a
//! [`Customer`] is what registration produces once the fields check out
//! and no existing customer claims the email address. The
//! [`RegistrationService`] runs that flow over caller-supplied repository
//! and notifier implementations.

mod error;
mod registration;
mod service;

pub use error::{BoxError, RegistrationError};
pub use registration::CustomerRegistration;
pub use service::{
    CustomerIdSource, CustomerNotifier, CustomerRepository, RandomIdSource, RegistrationService,
};

use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, Email};

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: CustomerId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Validated email address, unique across customers.
    pub email_address: Email,
}

impl Customer {
    /// Create a customer from already-validated parts.
    ///
    /// Registration builds customers through
    /// [`CustomerRegistration::into_customer`]; this constructor is for
    /// repository implementations rebuilding customers from storage.
    #[must_use]
    pub fn new(
        id: CustomerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: Email,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address,
        }
    }
}
