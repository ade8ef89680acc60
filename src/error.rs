/// Error types for the persisted store

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The host has no usable store (no window, storage disabled, sandboxed frame)
    #[error("localStorage is not available")]
    Unavailable,

    /// The store refused the operation (quota exceeded, security error)
    #[error("storage rejected {op} of `{key}`: {reason}")]
    Rejected {
        op: &'static str,
        key: String,
        reason: String,
    },
}

impl StoreError {
    pub fn rejected(op: &'static str, key: &str, reason: impl Into<String>) -> Self {
        StoreError::Rejected {
            op,
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
