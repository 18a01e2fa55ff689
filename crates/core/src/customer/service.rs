//! Customer registration service.

use tracing::{info, warn};

use super::{BoxError, Customer, CustomerRegistration, RegistrationError};
use crate::types::CustomerId;

/// Store of registered customers.
///
/// Implementations decide where customers live; registration only needs
/// an email lookup and a save.
pub trait CustomerRepository {
    /// Find the customer registered under an email address, if any.
    ///
    /// Registration passes the address exactly as the caller submitted it.
    ///
    /// # Errors
    ///
    /// Implementations surface their own failures (connectivity, storage)
    /// as [`BoxError`]s.
    fn customer_by_email(&self, email_address: &str) -> Result<Option<Customer>, BoxError>;

    /// Persist a newly registered customer.
    ///
    /// # Errors
    ///
    /// Implementations surface their own failures as [`BoxError`]s.
    fn save_customer(&self, customer: &Customer) -> Result<(), BoxError>;
}

impl<T: CustomerRepository + ?Sized> CustomerRepository for &T {
    fn customer_by_email(&self, email_address: &str) -> Result<Option<Customer>, BoxError> {
        (**self).customer_by_email(email_address)
    }

    fn save_customer(&self, customer: &Customer) -> Result<(), BoxError> {
        (**self).save_customer(customer)
    }
}

/// Outbound customer messaging.
pub trait CustomerNotifier {
    /// Send the post-registration welcome message.
    ///
    /// # Errors
    ///
    /// Implementations surface their own failures as [`BoxError`]s.
    fn send_welcome_message(&self, customer: &Customer) -> Result<(), BoxError>;
}

impl<T: CustomerNotifier + ?Sized> CustomerNotifier for &T {
    fn send_welcome_message(&self, customer: &Customer) -> Result<(), BoxError> {
        (**self).send_welcome_message(customer)
    }
}

/// Source of ids for new customers.
pub trait CustomerIdSource {
    /// Produce the id for the next new customer.
    fn next_id(&self) -> CustomerId;
}

impl<T: CustomerIdSource + ?Sized> CustomerIdSource for &T {
    fn next_id(&self) -> CustomerId {
        (**self).next_id()
    }
}

/// Default id source: random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl CustomerIdSource for RandomIdSource {
    fn next_id(&self) -> CustomerId {
        CustomerId::random()
    }
}

/// Customer registration service.
///
/// Validates a registration, rejects duplicate email addresses, persists
/// the new customer, and triggers the welcome message.
pub struct RegistrationService<R, N, G = RandomIdSource> {
    repository: R,
    notifier: N,
    ids: G,
}

impl<R, N> RegistrationService<R, N>
where
    R: CustomerRepository,
    N: CustomerNotifier,
{
    /// Create a service that assigns random customer ids.
    #[must_use]
    pub const fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
            ids: RandomIdSource,
        }
    }
}

impl<R, N, G> RegistrationService<R, N, G>
where
    R: CustomerRepository,
    N: CustomerNotifier,
    G: CustomerIdSource,
{
    /// Create a service with an explicit id source.
    #[must_use]
    pub const fn with_id_source(repository: R, notifier: N, ids: G) -> Self {
        Self {
            repository,
            notifier,
            ids,
        }
    }

    /// Register a new customer.
    ///
    /// Validates the registration, checks the repository for an existing
    /// customer under the same email address, then saves the new customer
    /// and sends the welcome message. Exactly one lookup happens per call;
    /// on success, exactly one save followed by exactly one welcome
    /// message.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::MissingRegistration`] if no
    /// registration is given, a validation error for blank or malformed
    /// fields, [`RegistrationError::DuplicateCustomer`] if the email
    /// address is already registered, and
    /// [`RegistrationError::Repository`] or
    /// [`RegistrationError::Notifier`] when a collaborator fails. Nothing
    /// is saved and no one is notified on validation or duplicate
    /// failures; the welcome message is not sent if the save fails.
    pub fn register(
        &self,
        registration: Option<CustomerRegistration>,
    ) -> Result<Customer, RegistrationError> {
        let Some(registration) = registration else {
            return Err(RegistrationError::MissingRegistration);
        };

        registration.validate()?;

        let existing = self
            .repository
            .customer_by_email(&registration.email_address)
            .map_err(RegistrationError::Repository)?;

        if existing.is_some() {
            warn!("Rejected registration for an email address that is already registered");
            return Err(RegistrationError::DuplicateCustomer);
        }

        let customer = registration.into_customer(self.ids.next_id())?;

        self.repository
            .save_customer(&customer)
            .map_err(RegistrationError::Repository)?;

        self.notifier
            .send_welcome_message(&customer)
            .map_err(RegistrationError::Notifier)?;

        info!(customer_id = %customer.id, "Registered new customer");

        Ok(customer)
    }
}
