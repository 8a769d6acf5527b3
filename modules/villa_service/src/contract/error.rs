//! Contract error types for the villa service

use thiserror::Error;

/// Villa service domain errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VillaError {
    /// Malformed or semantically invalid input
    #[error("Validation failed: {}", errors.join("; "))]
    Validation {
        /// Every collected validation message, in discovery order
        errors: Vec<String>,
    },

    /// A uniqueness rule would be violated
    #[error("Duplicate {field}: {message}")]
    Duplicate {
        /// Offending field
        field: String,
        /// Human-readable explanation
        message: String,
    },

    /// A referenced parent entity does not exist
    #[error("Foreign key {field}: {message}")]
    ForeignKey {
        /// Field holding the reference
        field: String,
        /// Human-readable explanation
        message: String,
    },

    /// Requested entity is absent
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (villa, villa_number)
        resource: String,
        /// Resource identifier
        id: String,
    },

    /// Underlying store failure
    #[error("Persistence error: {message}")]
    Persistence {
        /// Provider error text
        message: String,
    },
}

impl VillaError {
    /// Single-message validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![message.into()],
        }
    }

    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }
}
