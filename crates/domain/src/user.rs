//! User — an account identified by email, with an advisory role flag.
//!
//! The only recognized role value is [`ADMIN_ROLE`]. Nothing enforces email
//! uniqueness on the plain-insert path; only the upsert path keys on email.

use serde::{Deserialize, Serialize};

use crate::error::{CarHubError, ValidationError};
use crate::id::UserId;

/// The single role value the admin check recognizes.
pub const ADMIN_ROLE: &str = "admin";

/// An account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: UserId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Client-supplied fields with no dedicated column.
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Whether this user carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
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

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    name: Option<String>,
    role: Option<String>,
    extra: serde_json::Map<String, serde_json::Value>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: serde_json::Map<String, serde_json::Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`CarHubError::Validation`] if `email` is missing or empty.
    pub fn build(self) -> Result<User, CarHubError> {
        let user = User {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            name: self.name,
            role: self.role,
            extra: self.extra,
        };
        user.validate()?;
        Ok(user)
    }
}
