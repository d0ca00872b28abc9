//! Revenue chart rendering.

use super::format::{format_amount, pad, Align};
use crate::model::RevenuePoint;
use unicode_width::UnicodeWidthStr;

/// Default bar length, in terminal columns, of the largest value.
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR: char = '█';

/// Capability that turns a revenue series into some drawable output.
pub trait ChartRenderer {
    type Output;

    fn render(&self, series: &[RevenuePoint]) -> Self::Output;
}

/// One horizontal bar per point, scaled so the largest value spans
/// `bar_width` columns. Non-positive values draw an empty bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChartRenderer {
    bar_width: usize,
}

impl TextChartRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self { bar_width }
    }

    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    fn bar_len(&self, value: f64, max: f64) -> usize {
        if max <= 0.0 || value <= 0.0 || !value.is_finite() {
            return 0;
        }
        ((value / max) * self.bar_width as f64).round() as usize
    }
}

impl Default for TextChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_WIDTH)
    }
}

impl ChartRenderer for TextChartRenderer {
    type Output = String;

    fn render(&self, series: &[RevenuePoint]) -> String {
        if series.is_empty() {
            return "No revenue data\n".to_string();
        }

        let label_width = series
            .iter()
            .map(|point| point.name.width())
            .max()
            .unwrap_or(0);
        let max = series
            .iter()
            .map(|point| point.value)
            .filter(|value| value.is_finite())
            .fold(0.0_f64, f64::max);

        let mut out = String::from("Revenue\n\n");
        for point in series {
            let bar: String = std::iter::repeat(BAR)
                .take(self.bar_len(point.value, max))
                .collect();
            let line = format!(
                "{} {} {}",
                pad(&point.name, label_width, Align::Left),
                pad(&bar, self.bar_width, Align::Left),
                format_amount(point.value)
            );
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
