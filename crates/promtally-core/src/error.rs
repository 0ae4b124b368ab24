//! Shared error type across promtally crates.

use thiserror::Error;

/// Stable error codes, independent of the human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Missing or out-of-range argument.
    InvalidArgument,
    /// Reserved label name or prefix.
    InvalidLabel,
    /// No value recorded for the label set.
    NotFound,
    /// A collector with the same name already exists.
    AlreadyRegistered,
    /// Config could not be read or parsed.
    Config,
}

impl ErrorCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::InvalidLabel => "INVALID_LABEL",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::Config => "CONFIG",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and registry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MetricsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid label: {0}")]
    InvalidLabel(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("already registered: {0}")]
    AlreadyRegistered(String),
    #[error("config: {0}")]
    Config(String),
}

impl MetricsError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MetricsError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            MetricsError::InvalidLabel(_) => ErrorCode::InvalidLabel,
            MetricsError::NotFound(_) => ErrorCode::NotFound,
            MetricsError::AlreadyRegistered(_) => ErrorCode::AlreadyRegistered,
            MetricsError::Config(_) => ErrorCode::Config,
        }
    }
}
