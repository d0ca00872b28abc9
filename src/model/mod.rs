//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod kpi;
pub mod revenue;
pub mod transaction;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError, SourceError};
pub use identifiers::{InvalidTransactionId, TransactionId};
pub use kpi::{KpiMetric, TrendDirection, UnknownTrendDirection};
pub use revenue::{DashboardData, RevenuePoint};
pub use transaction::{Transaction, TransactionStatus, TransactionUser, UnknownStatus};
