//! Error types for the `malmoext-observe` crate.
//!
//! Returned only when the intake runs with [`InvalidPolicy::Reject`]; the
//! other policies drop bad observations and keep going.
//!
//! [`InvalidPolicy::Reject`]: crate::config::InvalidPolicy::Reject

use malmoext_types::{InvalidEntityError, UnknownValueError};

/// Errors raised while admitting observations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObserveError {
    /// An observed name is not part of any accepted vocabulary.
    #[error("rejected observation {id:?}: {source}")]
    Unknown {
        /// Identifier of the rejected observation.
        id: String,
        /// The vocabulary lookup failure.
        source: UnknownValueError,
    },

    /// An observation named a known type but failed record validation.
    #[error("rejected observation {id:?}: {source}")]
    InvalidEntity {
        /// Identifier of the rejected observation.
        id: String,
        /// The validation failure.
        source: InvalidEntityError,
    },
}
