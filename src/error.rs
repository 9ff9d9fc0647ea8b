//! Error types for the compact Proof-of-Retrievability core.

use std::path::PathBuf;

/// Error types for the PoR core.
///
/// `ProofRejected` is deliberately not a variant here: a failed pairing
/// check is a normal `Ok(false)` return from [`crate::verifier::verify`],
/// not a fatal error. Only IO, decoding, and parameter problems are
/// represented below.
#[derive(Debug, thiserror::Error)]
pub enum PorError {
    /// A file could not be opened, read, written, or seeked.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record's on-disk representation did not decode cleanly.
    #[error("decode error in {record} record: {reason}")]
    Decode {
        record: &'static str,
        reason: String,
    },

    /// An input parameter violated a precondition before any cryptographic
    /// work was attempted (s, c, n out of range, overflowing accumulator).
    #[error("invalid parameter: {reason}")]
    Parameter { reason: String },

    /// The curve library or CSPRNG reported a failure.
    #[error("cryptographic error: {0}")]
    Cryptographic(String),
}

impl PorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PorError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(record: &'static str, reason: impl Into<String>) -> Self {
        PorError::Decode {
            record,
            reason: reason.into(),
        }
    }

    pub fn parameter(reason: impl Into<String>) -> Self {
        PorError::Parameter {
            reason: reason.into(),
        }
    }
}

/// Convenience `Result` type for PoR core operations.
pub type Result<T> = std::result::Result<T, PorError>;
