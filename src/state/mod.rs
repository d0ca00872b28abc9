//! Interaction state (pure).
//!
//! All state transitions are plain methods testable without any front end.

pub mod query;
pub mod sort;
pub mod view;

// Re-export for convenience
pub use query::SearchQuery;
pub use sort::{
    SortColumn, SortDirection, SortSpec, UnknownSortColumn, UnknownSortDirection,
};
pub use view::{DEFAULT_PAGE_SIZE, TransactionView};
