//! Registration submitted by a prospective customer.

use serde::{Deserialize, Serialize};

use super::{Customer, RegistrationError};
use crate::types::{CustomerId, Email};

/// The raw fields a prospective customer submits.
///
/// Nothing is validated at construction; call [`validate`](Self::validate)
/// or convert with [`into_customer`](Self::into_customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRegistration {
    /// Given name, as typed.
    pub first_name: String,
    /// Family name, as typed.
    pub last_name: String,
    /// Email address, as typed.
    pub email_address: String,
}

impl CustomerRegistration {
    /// Create a registration from raw field values.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: email_address.into(),
        }
    }

    /// Check the registration fields.
    ///
    /// Fields are checked in order: first name, last name, email address
    /// presence, then email address grammar. The first violation wins.
    ///
    /// # Errors
    ///
    /// Returns the matching `Missing*` error for a blank field, or
    /// [`RegistrationError::InvalidEmailAddress`] if the email address is
    /// present but malformed.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        self.validated_email()?;
        Ok(())
    }

    /// Convert this registration into a [`Customer`] with the given id.
    ///
    /// Validates first, so a customer with blank names or a malformed
    /// email address can never come out of here. The customer carries the
    /// parsed email address and the names as submitted.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn into_customer(self, id: CustomerId) -> Result<Customer, RegistrationError> {
        let email_address = self.validated_email()?;

        Ok(Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email_address,
        })
    }

    fn validated_email(&self) -> Result<Email, RegistrationError> {
        if self.first_name.trim().is_empty() {
            return Err(RegistrationError::MissingFirstName);
        }

        if self.last_name.trim().is_empty() {
            return Err(RegistrationError::MissingLastName);
        }

        if self.email_address.trim().is_empty() {
            return Err(RegistrationError::MissingEmailAddress);
        }

        Ok(Email::parse(&self.email_address)?)
    }
}
