//! Error types for schema construction and rule evaluation.
//!
//! Two kinds of failure never mix. A [`ConfigError`] is raised while a schema is
//! being built and always reaches the schema author. An [`Exception`] is what a
//! predicate produced while data was being evaluated; it is recorded on the
//! invalid result and never propagated.

use crate::prop_types::range::RangeKind;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Stable code attached to every configuration error.
pub const CONFIG_ERROR_CODE: &str = "PROPTYPES_ERROR";

/// Main error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A combinator was given arguments it cannot work with
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Options could not be read from JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while a schema is being constructed.
///
/// These are programming errors in the schema itself: a combinator was called
/// with the wrong number or kind of arguments. They are returned immediately from
/// the combinator, before any data is validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Combinator received an argument of the wrong kind
    #[error("PropTypes.{combinator}() only takes {expected}; received {received}")]
    InvalidArgument {
        combinator: String,
        expected: String,
        received: String,
    },

    /// Range combinator received bad bounds
    #[error("PropTypes.{combinator}.{kind}() {reason}; received {received}")]
    InvalidRange {
        combinator: String,
        kind: RangeKind,
        reason: String,
        received: String,
    },
}

impl ConfigError {
    /// Create an invalid argument error
    pub fn invalid_argument(
        combinator: impl Into<String>,
        expected: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            combinator: combinator.into(),
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(
        combinator: impl Into<String>,
        kind: RangeKind,
        reason: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        Self::InvalidRange {
            combinator: combinator.into(),
            kind,
            reason: reason.into(),
            received: received.into(),
        }
    }

    /// Name of the combinator that rejected its arguments
    pub fn combinator(&self) -> &str {
        match self {
            Self::InvalidArgument { combinator, .. } | Self::InvalidRange { combinator, .. } => {
                combinator
            }
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        CONFIG_ERROR_CODE
    }
}

/// Error type a predicate may return to signal that it could not run.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync>;

/// Where a captured exception came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExceptionKind {
    /// The predicate returned an error
    Error,
    /// The predicate panicked
    Panic,
}

/// A failure raised inside a predicate, captured during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    pub kind: ExceptionKind,
    pub message: String,
}

impl Exception {
    /// Capture an error returned by a predicate
    pub fn from_error(error: &(dyn std::error::Error + Send + Sync)) -> Self {
        Self {
            kind: ExceptionKind::Error,
            message: error.to_string(),
        }
    }

    /// Capture the payload of a panic raised by a predicate
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "predicate panicked".to_string()
        };
        Self {
            kind: ExceptionKind::Panic,
            message,
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// Result type aliases for convenience
pub type Result<T> = std::result::Result<T, Error>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
