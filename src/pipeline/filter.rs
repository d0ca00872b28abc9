//! Free-text filtering.

use crate::model::Transaction;
use crate::state::SearchQuery;

/// Keep the records matching `query`, in their original order.
///
/// A record matches when the normalized query is a substring of its id,
/// its user's display name, or its status (all compared lowercased).
/// An empty query keeps every record.
pub fn filter<T>(records: &[T], query: &SearchQuery) -> Vec<T>
where
    T: AsRef<Transaction> + Clone,
{
    if query.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(record.as_ref(), query))
        .cloned()
        .collect()
}

/// Whether a single record matches a non-empty query.
pub fn matches(record: &Transaction, query: &SearchQuery) -> bool {
    query.matches_lowercased(&record.id().as_str().to_lowercase())
        || query.matches_lowercased(&record.user_name().to_lowercase())
        || query.matches_lowercased(record.status().as_str())
}
