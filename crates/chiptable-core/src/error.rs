//! Unified error type for registry operations
//!
//! Every precondition violation aborts the whole call with one of these
//! kinds; batches are all-or-nothing, so an error never leaves partial
//! state behind. The core is deterministic: retrying an identical call
//! against unchanged state reproduces the identical error.

use serde::{Deserialize, Serialize};

/// Unified error type for all registry operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RegistryError {
    /// Caller lacks the required role
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// What the caller was not allowed to do
        message: String,
    },

    /// Referenced TSM or chip absent
    #[error("Not found: {message}")]
    NotFound {
        /// What was not found
        message: String,
    },

    /// Duplicate TSM or chip
    #[error("Already exists: {message}")]
    AlreadyExists {
        /// What already exists
        message: String,
    },

    /// Attestation failed or the signature was malformed
    ///
    /// Callers cannot distinguish a forged signature from an unparseable
    /// one; both surface as this kind.
    #[error("Invalid signature: {message}")]
    InvalidSignature {
        /// Description of the failure
        message: String,
    },

    /// Paired-array batch inputs of unequal length
    #[error("Length mismatch: {message}")]
    LengthMismatch {
        /// Description of the mismatched inputs
        message: String,
    },

    /// Enumeration index beyond count
    #[error("Out of range: {message}")]
    OutOfRange {
        /// Description of the rejected index
        message: String,
    },

    /// Invalid input (zero identity at construction, unparseable key or
    /// identity text)
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the invalid input
        message: String,
    },
}

impl RegistryError {
    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an already exists error
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    /// Create an invalid signature error
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::InvalidSignature {
            message: message.into(),
        }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(message: impl Into<String>) -> Self {
        Self::LengthMismatch {
            message: message.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, RegistryError>;
