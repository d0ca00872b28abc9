//! Revenue series shown next to the transactions table.

/// One labelled point of the revenue trend (e.g. a month).
#[derive(Debug, Clone, PartialEq)]
pub struct RevenuePoint {
    pub name: String,
    pub value: f64,
}

impl RevenuePoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Everything a record source can hand to the dashboard.
///
/// The KPI metrics and revenue series are rendered independently of the
/// transactions table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub kpis: Vec<super::KpiMetric>,
    pub transactions: Vec<super::Transaction>,
    pub revenue: Vec<RevenuePoint>,
}
