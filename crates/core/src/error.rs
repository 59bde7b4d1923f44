//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised while reading or checking financial records.
///
/// Only deterministic, input-caused failures live here. Agent and transport
/// failures are modelled by the crates that own those calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field of the records is out of range or inconsistent with the rest.
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Name of the offending field, when the error points at one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::InvalidId(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_names_the_field() {
        let err = DomainError::invalid_input("fixed_costs.rental", "must be non-negative");
        assert_eq!(err.field(), Some("fixed_costs.rental"));
        assert_eq!(
            err.to_string(),
            "invalid input `fixed_costs.rental`: must be non-negative"
        );
    }

    #[test]
    fn id_errors_have_no_field() {
        assert_eq!(DomainError::invalid_id("ProductId: bad").field(), None);
    }
}
