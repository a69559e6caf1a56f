// ⚠️ Model Errors - three kinds, raised at the boundary
//
// Range            → numeric value outside its allowed domain
// Argument         → string value fails a required-content check
// InvalidOperation → well-formed call that is illegal in context

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{field} out of range ({value}): {message}")]
    Range {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error("invalid {field}: {message}")]
    Argument {
        field: &'static str,
        message: String,
    },

    #[error("invalid operation on {field}: {message}")]
    InvalidOperation {
        field: &'static str,
        message: String,
    },
}

impl ModelError {
    pub fn range(field: &'static str, value: impl ToString, message: impl Into<String>) -> Self {
        let err = ModelError::Range {
            field,
            value: value.to_string(),
            message: message.into(),
        };
        tracing::debug!(%err, "validation rejected");
        err
    }

    pub fn argument(field: &'static str, message: impl Into<String>) -> Self {
        let err = ModelError::Argument {
            field,
            message: message.into(),
        };
        tracing::debug!(%err, "validation rejected");
        err
    }

    pub fn invalid_operation(field: &'static str, message: impl Into<String>) -> Self {
        let err = ModelError::InvalidOperation {
            field,
            message: message.into(),
        };
        tracing::debug!(%err, "operation rejected");
        err
    }

    /// Name of the field (or operand) that caused the error
    pub fn field(&self) -> &'static str {
        match self {
            ModelError::Range { field, .. }
            | ModelError::Argument { field, .. }
            | ModelError::InvalidOperation { field, .. } => field,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, ModelError::Range { .. })
    }

    pub fn is_argument(&self) -> bool {
        matches!(self, ModelError::Argument { .. })
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, ModelError::InvalidOperation { .. })
    }
}
