//! Order — a placed order, tied to a user by email.
//!
//! The email is an advisory foreign key: nothing requires a matching user
//! document to exist.

use serde::{Deserialize, Serialize};

use crate::error::{CarHubError, ValidationError};
use crate::id::OrderId;

/// A placed order. Queried by `email`, deleted by identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", default)]
    pub id: OrderId,
    pub email: String,
    /// Client-supplied fields with no dedicated column (the ordered service,
    /// shipping details, and whatever else the storefront sends along).
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Order {
    /// Create a builder for constructing an [`Order`].
    #[must_use]
    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] when `email` is empty.
    pub fn validate(&self) -> Result<(), CarHubError> {
        if self.email.is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Order`].
#[derive(Debug, Default)]
pub struct OrderBuilder {
    id: Option<OrderId>,
    email: Option<String>,
    extra: serde_json::Map<String, serde_json::Value>,
}

impl OrderBuilder {
    #[must_use]
    pub fn id(mut self, id: OrderId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: serde_json::Map<String, serde_json::Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Consume the builder, validate, and return an [`Order`].
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] if `email` is missing or empty.
    pub fn build(self) -> Result<Order, CarHubError> {
        let order = Order {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            extra: self.extra,
        };
        order.validate()?;
        Ok(order)
    }
}
