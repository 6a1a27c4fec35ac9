//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CarHubError`]
//! via `#[from]` or an explicit `From` impl. No `String` variants.

/// Boundary validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required `name` field was missing or empty.
    #[error("name must not be empty")]
    EmptyName,
    /// A required `email` field was missing or empty.
    #[error("email must not be empty")]
    EmptyEmail,
    /// A path parameter was not a valid identifier.
    #[error("invalid identifier")]
    InvalidIdentifier,
}

/// Base error type shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum CarHubError {
    /// A client-supplied value failed boundary validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage layer failed; the source carries the adapter detail.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_carhub_error() {
        let err: CarHubError = ValidationError::EmptyEmail.into();
        assert!(matches!(
            err,
            CarHubError::Validation(ValidationError::EmptyEmail)
        ));
    }

    #[test]
    fn should_render_validation_message() {
        let err: CarHubError = ValidationError::InvalidIdentifier.into();
        assert_eq!(err.to_string(), "validation error: invalid identifier");
    }
}
