//! Shared fixtures for unit tests.
//!
//! Builds transactions tersely and mirrors the 25-record table used by the
//! acceptance suites.

use crate::model::{Transaction, TransactionId, TransactionStatus, TransactionUser};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Build a transaction from literals. Panics on bad input (tests only).
pub(crate) fn txn(
    id: &str,
    name: &str,
    date: &str,
    amount: f64,
    status: TransactionStatus,
) -> Transaction {
    let date: DateTime<Utc> = date.parse().expect("fixture date must be RFC 3339");
    Transaction::new(
        TransactionId::new(id).expect("fixture id must be non-empty"),
        TransactionUser::new(name, ""),
        date,
        amount,
        status,
    )
}

/// `TXN-0001..TXN-{count}`: user `User {n}`, one day older per record
/// starting 2025-12-09, amount `1000 + 100 * i`, status cycling
/// completed/pending/failed.
pub(crate) fn numbered_transactions(count: usize) -> Vec<Transaction> {
    let newest = Utc
        .with_ymd_and_hms(2025, 12, 9, 0, 0, 0)
        .single()
        .expect("valid fixture date");

    (0..count)
        .map(|i| {
            let status = match i % 3 {
                0 => TransactionStatus::Completed,
                1 => TransactionStatus::Pending,
                _ => TransactionStatus::Failed,
            };
            Transaction::new(
                TransactionId::new(format!("TXN-{:04}", i + 1)).expect("non-empty id"),
                TransactionUser::new(format!("User {}", i + 1), format!("U{}", i + 1)),
                newest - Duration::days(i as i64),
                1000.0 + (i as f64) * 100.0,
                status,
            )
        })
        .collect()
}

/// Ids of `records`, in order.
pub(crate) fn ids<T: AsRef<Transaction>>(records: &[T]) -> Vec<&str> {
    records.iter().map(|r| r.as_ref().id().as_str()).collect()
}
