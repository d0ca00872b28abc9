//! Core identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.

use std::fmt;

/// Unique identifier for a transaction (e.g. `TXN-0001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(String);

impl TransactionId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidTransactionId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidTransactionId::Empty);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTransactionId {
    #[error("Transaction ID cannot be empty")]
    Empty,
}

// ===== Tests =====
