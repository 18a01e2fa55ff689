//! Registration error types.

use thiserror::Error;

use crate::types::EmailError;

/// Boxed error for failures originating in collaborator implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during customer registration.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// No registration was supplied.
    #[error("customer registration is missing")]
    MissingRegistration,

    /// First name is empty or whitespace.
    #[error("missing first name")]
    MissingFirstName,

    /// Last name is empty or whitespace.
    #[error("missing last name")]
    MissingLastName,

    /// Email address is empty or whitespace.
    #[error("missing email address")]
    MissingEmailAddress,

    /// Email address is present but not a plausible address.
    #[error("invalid email address: {0}")]
    InvalidEmailAddress(#[from] EmailError),

    /// A customer is already registered under this email address.
    #[error("a customer with this email address already exists")]
    DuplicateCustomer,

    /// The repository failed to look up or save a customer.
    #[error("repository error: {0}")]
    Repository(#[source] BoxError),

    /// The notifier failed to send the welcome message.
    #[error("notifier error: {0}")]
    Notifier(#[source] BoxError),
}
