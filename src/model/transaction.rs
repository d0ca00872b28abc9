//! Transaction records.
//!
//! Records are immutable once constructed. The view engine only ever reads them.

use super::identifiers::TransactionId;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Settlement state of a transaction. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    /// All statuses, in declaration order.
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    /// Lowercase wire/display form. Also the string searched and sorted on.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transaction status '{0}' (expected completed, pending or failed)")]
pub struct UnknownStatus(pub String);

/// The user a transaction belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionUser {
    name: String,
    avatar: String,
}

impl TransactionUser {
    /// Create a user. When `avatar` is empty, initials are derived from the name.
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = avatar.into();
        let avatar = if avatar.is_empty() {
            initials(&name)
        } else {
            avatar
        };
        Self { name, avatar }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}

/// First character of each whitespace-separated word ("Jane Smith" -> "JS").
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// A single financial transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    user: TransactionUser,
    date: DateTime<Utc>,
    amount: f64,
    status: TransactionStatus,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        user: TransactionUser,
        date: DateTime<Utc>,
        amount: f64,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id,
            user,
            date,
            amount,
            status,
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn user(&self) -> &TransactionUser {
        &self.user
    }

    /// Display name of the owning user.
    pub fn user_name(&self) -> &str {
        self.user.name()
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }
}

// Lets the pipeline accept owned, borrowed and shared records alike.
impl AsRef<Transaction> for Transaction {
    fn as_ref(&self) -> &Transaction {
        self
    }
}
