//! Storage ports — repository traits for persistence.
//!
//! Each trait mirrors one stored collection. Absent documents are `Ok(None)`
//! or an empty `Vec`, never an error; write operations report what storage
//! acknowledged via the domain outcome types.

use std::future::Future;

use carhub_domain::error::CarHubError;
use carhub_domain::id::{OrderId, ServiceId};
use carhub_domain::order::Order;
use carhub_domain::outcome::{DeleteOutcome, UpdateOutcome};
use carhub_domain::review::Review;
use carhub_domain::service::Service;
use carhub_domain::user::User;

/// Repository for the services collection (listed items).
pub trait ServiceRepository {
    /// Insert a new service document.
    fn create(&self, service: Service)
    -> impl Future<Output = Result<Service, CarHubError>> + Send;

    /// Find a service by its unique identifier.
    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, CarHubError>> + Send;

    /// Scan the whole collection.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, CarHubError>> + Send;

    /// Delete a service by its unique identifier.
    fn delete(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<DeleteOutcome, CarHubError>> + Send;
}

/// Repository for the reviews collection. Reviews are append-and-scan only.
pub trait ReviewRepository {
    /// Insert a new review document.
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, CarHubError>> + Send;

    /// Scan the whole collection.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, CarHubError>> + Send;
}

/// Repository for the orders collection.
pub trait OrderRepository {
    /// Insert a new order document.
    fn create(&self, order: Order) -> impl Future<Output = Result<Order, CarHubError>> + Send;

    /// Find every order whose email matches.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Vec<Order>, CarHubError>> + Send;

    /// Delete an order by its unique identifier.
    fn delete(&self, id: OrderId)
    -> impl Future<Output = Result<DeleteOutcome, CarHubError>> + Send;
}

/// Repository for the users collection.
pub trait UserRepository {
    /// Insert a new user document. Does **not** enforce email uniqueness.
    fn create(&self, user: User) -> impl Future<Output = Result<User, CarHubError>> + Send;

    /// Update every user matching `user.email` with the given fields, or
    /// insert the document when no user matches.
    fn upsert(&self, user: User) -> impl Future<Output = Result<UpdateOutcome, CarHubError>> + Send;

    /// Set the role on every user matching `email`. No upsert.
    fn set_role(
        &self,
        email: &str,
        role: &str,
    ) -> impl Future<Output = Result<UpdateOutcome, CarHubError>> + Send;

    /// Find the first user whose email matches.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, CarHubError>> + Send;
}
