//! Transaction table view state.
//!
//! [`TransactionView`] owns the raw records and the interaction state
//! (query, sort, page, page size) and keeps the derived filtered/sorted
//! sequence up to date. Derived values are recomputed eagerly by every
//! mutator, so accessors are plain reads.
//!
//! Transition rules:
//! - [`set_query`](TransactionView::set_query) always resets to page 1.
//! - [`set_sort`](TransactionView::set_sort) never touches the page.
//! - [`set_page`](TransactionView::set_page) ignores pages outside `1..=total_pages`.
//! - [`set_records`](TransactionView::set_records) keeps the page unless it
//!   no longer exists, in which case it falls back to the last page.

use super::query::SearchQuery;
use super::sort::{SortColumn, SortSpec};
use crate::model::Transaction;
use crate::pipeline;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Searchable, sortable, paginated view over a transaction collection.
#[derive(Debug, Clone)]
pub struct TransactionView {
    records: Vec<Arc<Transaction>>,
    query: SearchQuery,
    sort: SortSpec,
    current_page: usize,
    page_size: NonZeroUsize,
    /// `records` filtered by `query` then ordered by `sort`.
    ordered: Vec<Arc<Transaction>>,
}

impl Default for TransactionView {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionView {
    /// Empty view with default state: no query, date descending, page 1, 10 rows.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            records: Vec::new(),
            query: SearchQuery::default(),
            sort: SortSpec::default(),
            current_page: 1,
            page_size,
            ordered: Vec::new(),
        }
    }

    /// Default view populated with `records`.
    pub fn from_records(records: impl IntoIterator<Item = Transaction>) -> Self {
        let mut view = Self::new();
        view.set_records(records);
        view
    }

    // ===== Mutators =====

    /// Replace the raw collection wholesale.
    ///
    /// The current page is kept. If it no longer exists the view moves to the
    /// last remaining page (page 1 when nothing is left).
    pub fn set_records(&mut self, records: impl IntoIterator<Item = Transaction>) {
        self.records = records.into_iter().map(Arc::new).collect();
        self.recompute();

        let last_page = self.total_pages().max(1);
        if self.current_page > last_page {
            warn!(
                page = self.current_page,
                last_page, "Current page no longer exists after record replacement"
            );
            self.current_page = last_page;
        }

        debug!(
            records = self.records.len(),
            results = self.ordered.len(),
            "Records replaced"
        );
    }

    /// Set the search text and go back to the first page.
    pub fn set_query(&mut self, text: impl AsRef<str>) {
        self.query = SearchQuery::new(text);
        self.current_page = 1;
        self.recompute();

        debug!(
            query = self.query.as_str(),
            results = self.ordered.len(),
            "Query updated"
        );
    }

    /// Activate a column header: toggle direction on the active column,
    /// otherwise sort ascending by the new column. The page is kept.
    pub fn set_sort(&mut self, column: SortColumn) {
        self.sort = self.sort.activate(column);
        self.recompute();

        debug!(
            column = self.sort.column.as_str(),
            direction = self.sort.direction.as_str(),
            "Sort updated"
        );
    }

    /// Jump to `page` if it exists. Returns whether the request was accepted.
    ///
    /// Out-of-range requests (including 0) leave the state untouched.
    pub fn set_page(&mut self, page: usize) -> bool {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
            true
        } else {
            debug!(
                requested = page,
                total_pages = self.total_pages(),
                "Ignoring out-of-range page request"
            );
            false
        }
    }

    /// Same as `set_page(current_page + 1)`.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_add(1))
    }

    /// Same as `set_page(current_page - 1)`.
    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    // ===== Derived values =====

    /// Records on the current page, in display order.
    pub fn visible_items(&self) -> Vec<&Transaction> {
        pipeline::paginate(&self.ordered, self.current_page, self.page_size.get())
            .iter()
            .map(|record| record.as_ref())
            .collect()
    }

    /// Every record matching the query, in display order (all pages).
    pub fn filtered_sorted(&self) -> impl Iterator<Item = &Transaction> {
        self.ordered.iter().map(|record| record.as_ref())
    }

    /// Number of records matching the query across all pages.
    pub fn total_result_count(&self) -> usize {
        self.ordered.len()
    }

    pub fn total_pages(&self) -> usize {
        pipeline::total_pages(self.ordered.len(), self.page_size.get())
    }

    /// Page numbers for the pagination controls.
    pub fn page_window(&self) -> Vec<usize> {
        pipeline::page_window(self.current_page, self.total_pages())
    }

    /// 1-based (first, last) result positions shown on this page.
    pub fn result_range(&self) -> Option<(usize, usize)> {
        pipeline::item_range(self.ordered.len(), self.current_page, self.page_size.get())
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Pagination controls are only worth showing with more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    // ===== State accessors =====

    pub fn current_sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Size of the raw collection, before filtering.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    fn recompute(&mut self) {
        // Always sort the unsorted filter output: ties must keep raw order,
        // which re-sorting the previous ordering would not guarantee.
        let filtered = pipeline::filter(&self.records, &self.query);
        self.ordered = pipeline::sort(&filtered, self.sort);
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
