//! Text rendering (impure shell).
//!
//! Everything here reads a [`TransactionView`](crate::state::TransactionView)
//! or the dashboard's KPI and revenue data and produces strings; no state is
//! mutated.

pub mod chart;
pub mod format;
pub mod kpi;
pub mod table;

pub use chart::{ChartRenderer, TextChartRenderer, DEFAULT_BAR_WIDTH};
pub use format::{
    format_amount, format_date, format_time, sort_indicator, status_badge, StatusTone,
};
pub use kpi::{format_trend, render_kpis, KPI_TITLE, NO_KPIS};
pub use table::{page_controls, render_table, result_summary, EMPTY_HINT, EMPTY_TITLE};
