//! Derived-view pipeline (pure).
//!
//! raw records → [`filter`] → [`sort`] → [`paginate`], with [`page_window`]
//! derived from the current page and [`total_pages`]. Every function here is
//! pure and testable without the view store.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod window;

pub use filter::{filter, matches};
pub use paginate::{item_range, paginate, total_pages};
pub use sort::{compare, compare_directed, compare_names, sort};
pub use window::{WINDOW_SIZE, page_window};
