//! Hard-failure error type for the crate's entry points.
//!
//! Everything in the validator's rule catalog is a *soft* failure (an [`crate::Issue`]);
//! this type only ever surfaces conditions that prevent a call from returning an IR at all.

use thiserror::Error;

/// The crate's `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Hard failures signaled by the parser, writer, and file-system helpers.
///
/// These are distinct from validation [`crate::Issue`]s: an `Error` means the call could not
/// complete at all, while an `Issue` means the call completed and produced an IR that may or
/// may not conform to the specification.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be parsed as JSON or YAML, or parsed to a shape the caller did
    /// not ask for (e.g. an OpenAPI root handed to [`crate::parse_schema_string`]).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of what went wrong.
        message: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path that was being read or written.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}
