//! KPI summary rendering.

use super::format::{pad, Align};
use crate::model::KpiMetric;
use unicode_width::UnicodeWidthStr;

pub const KPI_TITLE: &str = "Key Metrics";
pub const NO_KPIS: &str = "No KPI metrics";

/// `▲ +12.5% vs last month`
pub fn format_trend(metric: &KpiMetric) -> String {
    let direction = metric.direction();
    format!(
        "{} {}{}% vs last month",
        direction.arrow(),
        direction.sign(),
        metric.trend().abs()
    )
}

/// One line per metric: label, right-aligned value, trend.
///
/// Values are printed as given; they are already display text.
pub fn render_kpis(metrics: &[KpiMetric]) -> String {
    if metrics.is_empty() {
        return format!("{NO_KPIS}\n");
    }

    let label_width = metrics.iter().map(|m| m.label().width()).max().unwrap_or(0);
    let value_width = metrics.iter().map(|m| m.value().width()).max().unwrap_or(0);

    let mut out = format!("{KPI_TITLE}\n\n");
    for metric in metrics {
        let line = format!(
            "{} {} {}",
            pad(metric.label(), label_width, Align::Left),
            pad(metric.value(), value_width, Align::Right),
            format_trend(metric)
        );
        out.push_str(&line);
        out.push('\n');
    }
    out
}
