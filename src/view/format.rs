//! Cell formatting for the transactions table.
//!
//! Timestamps render in UTC.

use crate::model::TransactionStatus;
use crate::state::{SortColumn, SortDirection, SortSpec};
use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

/// `Dec 9, 2025`
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `02:30 PM`
pub fn format_time(date: DateTime<Utc>) -> String {
    date.format("%I:%M %p").to_string()
}

/// Format an amount in dollars with thousands separators.
///
/// Up to three fraction digits are kept, trailing zeros dropped:
/// - `format_amount(1234.0)` → "$1,234"
/// - `format_amount(1234.5)` → "$1,234.5"
/// - `format_amount(-20.0)` → "-$20"
pub fn format_amount(amount: f64) -> String {
    // `as` saturates, NaN becomes 0
    let thousandths = (amount.abs() * 1000.0).round() as u64;
    let whole = thousandths / 1000;
    let fraction = thousandths % 1000;

    let sign = if amount.is_sign_negative() && thousandths > 0 {
        "-"
    } else {
        ""
    };

    let mut out = format!("{sign}${}", group_thousands(whole));
    if fraction > 0 {
        let digits = format!("{fraction:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// `1234567` → "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Horizontal alignment of a padded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Pad `cell` with spaces to `width` terminal columns.
///
/// Widths are display columns, not chars, so wide glyphs in user names keep
/// the grid aligned. Cells already wider than `width` are returned as-is.
pub fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
}

impl StatusTone {
    pub fn for_status(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Completed => StatusTone::Success,
            TransactionStatus::Pending => StatusTone::Warning,
            TransactionStatus::Failed => StatusTone::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Danger => "danger",
        }
    }

    /// Single-column marker drawn before the status text.
    pub fn marker(&self) -> char {
        match self {
            StatusTone::Success => '+',
            StatusTone::Warning => '~',
            StatusTone::Danger => 'x',
        }
    }
}

/// `+ completed`, `~ pending`, `x failed`
pub fn status_badge(status: TransactionStatus) -> String {
    format!("{} {}", StatusTone::for_status(status).marker(), status)
}

/// Arrow shown next to the active column's header, `None` for the others.
pub fn sort_indicator(column: SortColumn, spec: SortSpec) -> Option<char> {
    if column != spec.column {
        return None;
    }
    Some(match spec.direction {
        SortDirection::Ascending => '↑',
        SortDirection::Descending => '↓',
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
    }

    #[test]
    fn format_date_uses_short_month_and_unpadded_day() {
        assert_eq!(format_date(at(2025, 12, 9, 14, 30)), "Dec 9, 2025");
        assert_eq!(format_date(at(2024, 1, 31, 0, 0)), "Jan 31, 2024");
    }

    #[test]
    fn format_time_is_two_digit_twelve_hour() {
        assert_eq!(format_time(at(2025, 12, 9, 14, 30)), "02:30 PM");
        assert_eq!(format_time(at(2025, 12, 9, 0, 5)), "12:05 AM");
        assert_eq!(format_time(at(2025, 12, 9, 12, 0)), "12:00 PM");
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(123), "123");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn format_amount_whole_dollars() {
        assert_eq!(format_amount(0.0), "$0");
        assert_eq!(format_amount(1200.0), "$1,200");
        assert_eq!(format_amount(4_999_999.0), "$4,999,999");
    }

    #[test]
    fn format_amount_keeps_up_to_three_fraction_digits() {
        assert_eq!(format_amount(250.5), "$250.5");
        assert_eq!(format_amount(19.99), "$19.99");
        assert_eq!(format_amount(1.23456), "$1.235");
    }

    #[test]
    fn format_amount_negative_puts_sign_first() {
        assert_eq!(format_amount(-20.0), "-$20");
        assert_eq!(format_amount(-0.0), "$0");
        assert_eq!(format_amount(-0.0001), "$0");
    }

    #[test]
    fn pad_counts_display_columns() {
        assert_eq!(pad("ab", 4, Align::Left), "ab  ");
        assert_eq!(pad("ab", 4, Align::Right), "  ab");
        // Each CJK glyph occupies two columns
        assert_eq!(pad("李雷", 6, Align::Left), "李雷  ");
        assert_eq!(pad("overflow", 3, Align::Left), "overflow");
    }

    #[test]
    fn status_tone_per_status() {
        assert_eq!(StatusTone::for_status(TransactionStatus::Completed), StatusTone::Success);
        assert_eq!(StatusTone::for_status(TransactionStatus::Pending), StatusTone::Warning);
        assert_eq!(StatusTone::for_status(TransactionStatus::Failed), StatusTone::Danger);
        assert_eq!(StatusTone::Danger.as_str(), "danger");
    }

    #[test]
    fn status_badge_prefixes_marker() {
        assert_eq!(status_badge(TransactionStatus::Pending), "~ pending");
    }

    #[test]
    fn sort_indicator_only_on_active_column() {
        let spec = SortSpec::new(SortColumn::Amount, SortDirection::Ascending);

        assert_eq!(sort_indicator(SortColumn::Amount, spec), Some('↑'));
        assert_eq!(sort_indicator(SortColumn::Date, spec), None);
        assert_eq!(
            sort_indicator(SortColumn::Amount, SortSpec::new(SortColumn::Amount, SortDirection::Descending)),
            Some('↓')
        );
    }
}
