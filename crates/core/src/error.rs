//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic business outcome: validation, naming
/// conflicts, lookup misses, role and lifecycle violations. Storage failures
/// belong to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The email is already registered by another user.
    #[error("email already registered")]
    DuplicateEmail,

    /// A name is already taken in the scope it must be unique in.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// The same owner already has an enterprise with this name at this address.
    #[error("an enterprise with this name and address already exists")]
    DuplicateNameAndAddress,

    #[error("user not found")]
    UserNotFound,

    #[error("enterprise not found")]
    EnterpriseNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("order not found")]
    OrderNotFound,

    /// The user's role does not allow the operation.
    #[error("unauthorized role: {0}")]
    UnauthorizedRole(String),

    /// The customer already has an open order at this enterprise.
    #[error("customer already has an open order at this enterprise")]
    DuplicateOpenOrder,

    /// The operation is not allowed in the entity's current lifecycle state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Attribute-name dispatch miss.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn duplicate_name(msg: impl Into<String>) -> Self {
        Self::DuplicateName(msg.into())
    }

    pub fn unauthorized_role(msg: impl Into<String>) -> Self {
        Self::UnauthorizedRole(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn unknown_attribute(attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute(attribute.into())
    }
}

/// Fail with `InvalidArgument` when `value` is empty or whitespace only.
pub fn require_non_empty(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_non_empty_rejects_blank_values() {
        assert!(require_non_empty("Pizzaria", "name").is_ok());

        let err = require_non_empty("   ", "name").unwrap_err();
        assert_eq!(err, DomainError::InvalidArgument("name cannot be empty".to_string()));
    }

    #[test]
    fn messages_carry_context() {
        let err = DomainError::unknown_attribute("cor");
        assert_eq!(err.to_string(), "unknown attribute: cor");
    }
}
