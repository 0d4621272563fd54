#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use thiserror::Error;

/// Specifies why a set of points cannot be read or ranked.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum FrontError {
    /// Input is malformed: odd amount of values, non-numeric token, ragged dimensions.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// There is nothing to rank.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// An objective value is NaN or infinite, so dominance is undefined.
    #[error("numeric error: {0}")]
    NumericError(String),

    /// Input cannot be read.
    #[error("io error: {0}")]
    Io(String),
}

/// A type alias for result type with `FrontError`.
pub type FrontResult<T> = Result<T, FrontError>;

impl From<std::io::Error> for FrontError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

/// An error type used by orchestration code: either a failure of ranking or reading points,
/// kept as is, or a plain message.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum GenericError {
    /// Points cannot be read or ranked.
    #[error(transparent)]
    Front(#[from] FrontError),

    /// Any other failure described by a message.
    #[error("{0}")]
    Message(String),
}

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator.
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self::Message(msg)
    }
}

impl From<&str> for GenericError {
    fn from(msg: &str) -> Self {
        Self::Message(msg.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self::Front(value.into())
    }
}
