//! Page-number window for pagination controls.

/// Maximum number of page buttons shown at once.
pub const WINDOW_SIZE: usize = 5;

/// Up to [`WINDOW_SIZE`] contiguous page numbers around `current_page`.
///
/// The window starts two pages before the current one, is cut at
/// `total_pages`, and slides left near the end so it stays full whenever
/// enough pages exist. No pages yields an empty window.
///
/// ```
/// use txview::pipeline::page_window;
///
/// assert_eq!(page_window(1, 3), vec![1, 2, 3]);
/// assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
/// assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
/// assert!(page_window(1, 0).is_empty());
/// ```
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let span = WINDOW_SIZE - 1;
    let mut start = current_page.saturating_sub(2).max(1);
    let end = total_pages.min(start.saturating_add(span));

    if end.saturating_sub(start) < span {
        start = end.saturating_sub(span).max(1);
    }

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_page_counts_show_every_page() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(3, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(4, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_pages_no_window() {
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn window_at_start_is_anchored_left() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_in_middle_is_centered() {
        assert_eq!(page_window(4, 10), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_near_end_slides_left() {
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn current_past_total_still_yields_last_pages() {
        assert_eq!(page_window(10, 3), vec![1, 2, 3]);
        assert_eq!(page_window(usize::MAX, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(usize::MAX, usize::MAX).len(), WINDOW_SIZE);
    }

    #[test]
    fn window_never_exceeds_size() {
        for total in 0..30 {
            for current in 1..=total.max(1) {
                let window = page_window(current, total);
                assert!(window.len() <= WINDOW_SIZE);
                assert!(window.iter().all(|&p| p >= 1 && p <= total));
                if total > 0 {
                    assert!(window.contains(&current), "{current} of {total}: {window:?}");
                }
            }
        }
    }
}
