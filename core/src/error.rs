//! Classified guard failures.

use thiserror::Error;

/// Result type for guard operations.
pub type GuardResult<T> = Result<T, GuardError>;

/// A classified validation failure.
///
/// The kind is decided once, at the point of detection: ordering and range
/// guards on unmodified arguments fail as [`OutOfRange`](Self::OutOfRange),
/// ordering guards on modified arguments and every shape guard fail as
/// [`InvalidArgument`](Self::InvalidArgument), and presence guards fail as
/// [`MissingValue`](Self::MissingValue). The offending value is carried only
/// when the argument is not secure.
#[derive(Debug, Error)]
pub enum GuardError {
    /// An ordering or range constraint failed on an unmodified argument.
    #[error("{message}")]
    OutOfRange {
        name: String,
        value: Option<String>,
        message: String,
    },

    /// A constraint failed on a modified argument, or a shape constraint
    /// failed regardless of provenance.
    #[error("{message}")]
    InvalidArgument {
        name: String,
        value: Option<String>,
        message: String,
    },

    /// A required value was absent.
    #[error("{message}")]
    MissingValue { name: String, message: String },
}

impl GuardError {
    /// Create an out-of-range failure.
    pub fn out_of_range(
        name: impl Into<String>,
        value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            name: name.into(),
            value,
            message: message.into(),
        }
    }

    /// Create a generic invalid-argument failure.
    pub fn invalid_argument(
        name: impl Into<String>,
        value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            value,
            message: message.into(),
        }
    }

    /// Create a missing-value failure.
    pub fn missing_value(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingValue {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The name of the argument that failed validation.
    pub fn name(&self) -> &str {
        match self {
            Self::OutOfRange { name, .. } => name,
            Self::InvalidArgument { name, .. } => name,
            Self::MissingValue { name, .. } => name,
        }
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        match self {
            Self::OutOfRange { message, .. } => message,
            Self::InvalidArgument { message, .. } => message,
            Self::MissingValue { message, .. } => message,
        }
    }

    /// The offending value, if the argument allowed disclosure.
    pub fn offending_value(&self) -> Option<&str> {
        match self {
            Self::OutOfRange { value, .. } => value.as_deref(),
            Self::InvalidArgument { value, .. } => value.as_deref(),
            Self::MissingValue { .. } => None,
        }
    }

    /// Check if this is an out-of-range failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Check if this is a generic invalid-argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this is a missing-value failure.
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Self::MissingValue { .. })
    }
}
