//! JSON parser for transaction payloads.
//!
//! Two shapes are accepted:
//! - a bare array of transactions
//! - a dashboard document
//!   `{ "kpiMetrics": [...], "recentTransactions": [...], "revenueData": [...] }`
//!
//! Raw serde structs are converted into validated model types here, so
//! nothing past this boundary sees unparsed timestamps or unknown statuses.

use crate::model::{
    DashboardData, KpiMetric, ParseError, RevenuePoint, Transaction, TransactionId,
    TransactionStatus, TransactionUser, TrendDirection,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw JSON structure for deserializing a transaction.
#[derive(Debug, Deserialize)]
struct RawTransaction {
    id: String,
    user: RawUser,
    date: String,
    amount: f64,
    status: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    name: String,
    #[serde(default)]
    avatar: String,
}

#[derive(Debug, Deserialize)]
struct RawRevenuePoint {
    name: String,
    value: f64,
}

/// Icon and colour fields of a KPI card are presentation-only and skipped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKpiMetric {
    label: String,
    value: String,
    trend: f64,
    trend_direction: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDashboard {
    #[serde(default)]
    kpi_metrics: Vec<RawKpiMetric>,
    #[serde(default)]
    recent_transactions: Vec<RawTransaction>,
    #[serde(default)]
    revenue_data: Vec<RawRevenuePoint>,
}

fn invalid_json(err: serde_json::Error) -> ParseError {
    ParseError::InvalidJson {
        message: err.to_string(),
    }
}

/// Parse either payload shape into dashboard data.
///
/// A bare array yields no KPI metrics and an empty revenue series.
///
/// # Errors
///
/// Returns `ParseError` if the JSON is malformed, has the wrong shape, or a
/// record fails validation (empty id, bad timestamp, unknown status, unknown
/// trend direction).
pub fn parse_dashboard(raw: &str) -> Result<DashboardData, ParseError> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(invalid_json)?;

    let dashboard = if value.is_array() {
        RawDashboard {
            kpi_metrics: Vec::new(),
            recent_transactions: serde_json::from_value(value).map_err(invalid_json)?,
            revenue_data: Vec::new(),
        }
    } else {
        serde_json::from_value::<RawDashboard>(value).map_err(invalid_json)?
    };

    let kpis = dashboard
        .kpi_metrics
        .into_iter()
        .enumerate()
        .map(|(index, raw)| parse_kpi(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let transactions = dashboard
        .recent_transactions
        .into_iter()
        .enumerate()
        .map(|(index, raw)| parse_transaction(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let revenue = dashboard
        .revenue_data
        .into_iter()
        .map(|point| RevenuePoint::new(point.name, point.value))
        .collect();

    Ok(DashboardData {
        kpis,
        transactions,
        revenue,
    })
}

/// Parse a payload and keep only the transactions.
pub fn parse_transactions(raw: &str) -> Result<Vec<Transaction>, ParseError> {
    parse_dashboard(raw).map(|data| data.transactions)
}

/// Validate one raw record. `index` is its position, for error reporting.
fn parse_transaction(index: usize, raw: RawTransaction) -> Result<Transaction, ParseError> {
    let id = TransactionId::new(raw.id).map_err(|_| ParseError::MissingField {
        index,
        field: "id",
    })?;

    if raw.user.name.trim().is_empty() {
        return Err(ParseError::MissingField {
            index,
            field: "user.name",
        });
    }

    let date: DateTime<Utc> = raw.date.parse().map_err(|_| ParseError::InvalidTimestamp {
        index,
        raw: raw.date.clone(),
    })?;

    let status: TransactionStatus =
        raw.status
            .parse()
            .map_err(|_| ParseError::InvalidStatus {
                index,
                raw: raw.status.clone(),
            })?;

    Ok(Transaction::new(
        id,
        TransactionUser::new(raw.user.name, raw.user.avatar),
        date,
        raw.amount,
        status,
    ))
}

fn parse_kpi(index: usize, raw: RawKpiMetric) -> Result<KpiMetric, ParseError> {
    let direction: TrendDirection =
        raw.trend_direction
            .parse()
            .map_err(|_| ParseError::InvalidTrendDirection {
                index,
                raw: raw.trend_direction.clone(),
            })?;

    Ok(KpiMetric::new(raw.label, raw.value, raw.trend, direction))
}
