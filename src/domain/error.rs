use std::fmt;
use std::io;

use thiserror::Error;

/// Opaque cause of a failed remote describe call.
pub type UpstreamCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Kind of inventory resource an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    NetworkInterface,
    Instance,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::NetworkInterface => write!(f, "network interface"),
            ResourceKind::Instance => write!(f, "instance"),
        }
    }
}

/// Library-wide error type for eniscope operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A single-identifier lookup matched nothing.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: ResourceKind, id: String },

    /// A single-identifier lookup matched more than one record.
    #[error("{kind} '{id}' matched {count} records, expected exactly one")]
    AmbiguousResult { kind: ResourceKind, id: String, count: usize },

    /// The remote describe call itself failed.
    #[error("{operation} failed: {source}")]
    Upstream {
        operation: &'static str,
        #[source]
        source: UpstreamCause,
    },

    /// Identifier is empty or contains characters the provider never assigns.
    #[error("Invalid {kind} identifier '{value}'")]
    InvalidIdentifier { kind: ResourceKind, value: String },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn upstream<E>(operation: &'static str, cause: E) -> Self
    where
        E: Into<UpstreamCause>,
    {
        AppError::Upstream { operation, source: cause.into() }
    }
}
