//! Column sorting.
//!
//! Sorting is stable in both directions: records that compare equal keep the
//! relative order they had in the input, even when the direction is
//! descending (the per-column ordering is reversed, not the output).

use crate::model::Transaction;
use crate::state::{SortColumn, SortDirection, SortSpec};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Return a new sequence ordered by `spec`. The input is left untouched.
pub fn sort<T>(records: &[T], spec: SortSpec) -> Vec<T>
where
    T: AsRef<Transaction> + Clone,
{
    let mut sorted = records.to_vec();
    // slice::sort_by is a stable merge sort
    sorted.sort_by(|a, b| compare_directed(a.as_ref(), b.as_ref(), spec));
    sorted
}

/// Ordering of two records under `spec`, direction applied.
pub fn compare_directed(a: &Transaction, b: &Transaction, spec: SortSpec) -> Ordering {
    let ordering = compare(spec.column, a, b);
    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Ascending ordering of two records on a single column.
pub fn compare(column: SortColumn, a: &Transaction, b: &Transaction) -> Ordering {
    match column {
        SortColumn::User => compare_names(a.user_name(), b.user_name()),
        SortColumn::Date => a.date().cmp(&b.date()),
        SortColumn::Amount => a.amount().total_cmp(&b.amount()),
        SortColumn::Status => a.status().as_str().cmp(b.status().as_str()),
    }
}

/// Dictionary-style name comparison.
///
/// Names compare on their base letters first, ignoring case and accents
/// ("adam" < "Bob" < "Émile" < "zoe"). Ties are split by accents, unaccented
/// first, then by case, lowercase first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| {
            let case_a = a.nfd().map(char::is_uppercase);
            let case_b = b.nfd().map(char::is_uppercase);
            case_a.cmp(case_b)
        })
}

/// Lowercased letters with combining marks stripped.
fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased letters in decomposed form, marks kept.
fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
