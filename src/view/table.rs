//! Plain-text rendering of the transactions table.
//!
//! Renders one page of a [`TransactionView`]: a title, the column grid with
//! the active sort arrow, the rows (or the empty state), and the pagination
//! footer when there is more than one page. Dates are UTC and the Date header
//! is labelled accordingly.

use super::format::{
    format_amount, format_date, format_time, pad, sort_indicator, status_badge, Align,
};
use crate::model::Transaction;
use crate::state::{SortColumn, SortSpec, TransactionView};
use unicode_width::UnicodeWidthStr;

/// Shown in place of rows when nothing matches.
pub const EMPTY_TITLE: &str = "No transactions found";

/// Second line of the empty state.
pub const EMPTY_HINT: &str = "Try adjusting your search criteria";

const COLUMN_GAP: &str = "  ";

/// Dates are rendered in UTC; the header says so.
const DATE_ZONE_NOTE: &str = " (UTC)";

/// ID, then one column per sortable field.
const ALIGNMENT: [Align; 5] = [
    Align::Left,
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Left,
];

fn header_row(spec: SortSpec) -> Vec<String> {
    let mut cells = vec!["ID".to_string()];
    for column in SortColumn::ALL {
        let mut label = column.label().to_string();
        if column == SortColumn::Date {
            label.push_str(DATE_ZONE_NOTE);
        }
        if let Some(arrow) = sort_indicator(column, spec) {
            label.push(' ');
            label.push(arrow);
        }
        cells.push(label);
    }
    cells
}

fn record_row(record: &Transaction) -> Vec<String> {
    vec![
        record.id().to_string(),
        record.user_name().to_string(),
        format!("{} {}", format_date(record.date()), format_time(record.date())),
        format_amount(record.amount()),
        status_badge(record.status()),
    ]
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(ALIGNMENT)
        .map(|((cell, &width), align)| pad(cell, width, align))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

/// "Showing 11 to 20 of 25 results", or `None` with no results.
pub fn result_summary(view: &TransactionView) -> Option<String> {
    view.result_range().map(|(first, last)| {
        format!(
            "Showing {first} to {last} of {} results",
            view.total_result_count()
        )
    })
}

/// Previous/next links around the page window, current page in brackets.
pub fn page_controls(view: &TransactionView) -> String {
    let mut parts = Vec::new();

    if view.has_previous_page() {
        parts.push("< Previous".to_string());
    }
    for page in view.page_window() {
        if page == view.current_page() {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if view.has_next_page() {
        parts.push("Next >".to_string());
    }

    parts.join(" ")
}

/// Render the current page of `view`. Output ends with a newline.
pub fn render_table(view: &TransactionView) -> String {
    let mut lines = vec![
        format!(
            "Recent Transactions ({} total transactions)",
            view.total_result_count()
        ),
        String::new(),
    ];

    let header = header_row(view.current_sort_spec());
    let rows: Vec<Vec<String>> = view.visible_items().into_iter().map(record_row).collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    lines.push(render_line(&header, &widths));
    lines.push(
        widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );

    if rows.is_empty() {
        lines.push(String::new());
        lines.push(EMPTY_TITLE.to_string());
        lines.push(EMPTY_HINT.to_string());
    } else {
        lines.extend(rows.iter().map(|row| render_line(row, &widths)));
    }

    if view.shows_pagination() {
        lines.push(String::new());
        lines.extend(result_summary(view));
        lines.push(page_controls(view));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransactionStatus;
    use crate::test_harness::{numbered_transactions, txn};
    use std::num::NonZeroUsize;

    fn three_record_view() -> TransactionView {
        let mut view = TransactionView::with_page_size(NonZeroUsize::new(2).unwrap());
        view.set_records(vec![
            txn(
                "TXN-1",
                "Alice Johnson",
                "2025-12-09T14:30:00Z",
                1200.0,
                TransactionStatus::Completed,
            ),
            txn("TXN-2", "Bob", "2025-12-08T09:05:00Z", 250.5, TransactionStatus::Pending),
            txn("TXN-3", "Carol", "2025-12-07T23:59:00Z", 15000.0, TransactionStatus::Failed),
        ]);
        view
    }

    #[test]
    fn renders_first_page_with_footer() {
        let view = three_record_view();

        insta::assert_snapshot!(render_table(&view), @r"
        Recent Transactions (3 total transactions)

        ID     User           Date (UTC) ↓          Amount  Status
        -----  -------------  --------------------  ------  -----------
        TXN-1  Alice Johnson  Dec 9, 2025 02:30 PM  $1,200  + completed
        TXN-2  Bob            Dec 8, 2025 09:05 AM  $250.5  ~ pending

        Showing 1 to 2 of 3 results
        [1] 2 Next >
        ");
    }

    #[test]
    fn column_widths_follow_visible_page_only() {
        let mut view = three_record_view();
        view.set_page(2);

        let expected = "\
Recent Transactions (3 total transactions)

ID     User   Date (UTC) ↓           Amount  Status
-----  -----  --------------------  -------  --------
TXN-3  Carol  Dec 7, 2025 11:59 PM  $15,000  x failed

Showing 3 to 3 of 3 results
< Previous 1 [2]
";
        assert_eq!(render_table(&view), expected);
    }

    #[test]
    fn empty_result_shows_empty_state_without_footer() {
        let mut view = three_record_view();
        view.set_query("nobody");

        let expected = "\
Recent Transactions (0 total transactions)

ID  User  Date (UTC) ↓  Amount  Status
--  ----  ------------  ------  ------

No transactions found
Try adjusting your search criteria
";
        assert_eq!(render_table(&view), expected);
    }

    #[test]
    fn single_page_has_no_footer() {
        let view = TransactionView::from_records(numbered_transactions(4));

        let output = render_table(&view);

        assert!(!output.contains("Showing"));
        assert_eq!(output.lines().count(), 4 + 4);
    }

    #[test]
    fn header_arrow_follows_active_column() {
        let mut view = three_record_view();
        view.set_sort(SortColumn::Amount);

        let output = render_table(&view);
        let header = output.lines().nth(2).unwrap();

        assert!(header.contains("Amount ↑"), "got: {header}");
        assert!(header.contains("Date (UTC)"));
        assert!(!header.contains('↓'));
    }

    #[test]
    fn date_header_names_utc_and_rows_use_utc_clock() {
        let mut view = TransactionView::new();
        view.set_records(vec![txn(
            "TXN-1",
            "Ana",
            "2025-12-09T23:30:00-05:00",
            1.0,
            TransactionStatus::Completed,
        )]);

        let output = render_table(&view);

        assert!(output.lines().nth(2).unwrap().contains("Date (UTC) ↓"));
        assert!(output.contains("Dec 10, 2025 04:30 AM"), "got:\n{output}");
    }

    #[test]
    fn page_controls_on_middle_page() {
        let mut view = TransactionView::from_records(numbered_transactions(100));
        view.set_page(5);

        assert_eq!(page_controls(&view), "< Previous 3 4 [5] 6 7 Next >");
    }

    #[test]
    fn result_summary_on_last_partial_page() {
        let mut view = TransactionView::from_records(numbered_transactions(25));
        view.set_page(3);

        assert_eq!(
            result_summary(&view).as_deref(),
            Some("Showing 21 to 25 of 25 results")
        );
    }

    #[test]
    fn result_summary_none_without_results() {
        assert_eq!(result_summary(&TransactionView::new()), None);
    }
}
