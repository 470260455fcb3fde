//! Error types for trogon-env

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::duration::ParseDurationError;

/// Result type alias
pub type Result<T> = std::result::Result<T, EnvError>;

/// A variable was set but its value does not parse as the requested type.
///
/// Absence is never an error; it shows up as `Ok(None)` from the checked
/// accessors instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvError {
    #[error("{name}={value:?} is not a valid integer: {source}")]
    InvalidInt {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{name}={value:?} is not a valid float: {source}")]
    InvalidFloat {
        name: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{name}={value:?} is not a valid float: out of range")]
    FloatOutOfRange { name: String, value: String },

    #[error("{name}={value:?} is not a valid duration: {source}")]
    InvalidDuration {
        name: String,
        value: String,
        #[source]
        source: ParseDurationError,
    },

    #[error("{name}={value:?} could not be parsed: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

impl EnvError {
    /// The variable that held the malformed value.
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidInt { name, .. }
            | Self::InvalidFloat { name, .. }
            | Self::FloatOutOfRange { name, .. }
            | Self::InvalidDuration { name, .. }
            | Self::Invalid { name, .. } => name,
        }
    }

    /// The raw value exactly as read from the environment.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidInt { value, .. }
            | Self::InvalidFloat { value, .. }
            | Self::FloatOutOfRange { value, .. }
            | Self::InvalidDuration { value, .. }
            | Self::Invalid { value, .. } => value,
        }
    }

    /// What the value failed to parse as, e.g. `"integer"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInt { .. } => "integer",
            Self::InvalidFloat { .. } | Self::FloatOutOfRange { .. } => "float",
            Self::InvalidDuration { .. } => "duration",
            Self::Invalid { .. } => "value",
        }
    }
}
