//! Fixed-size pages over an ordered sequence.
//!
//! Pages are 1-indexed. A page size of zero has no pages.

/// Number of pages needed for `count` items: `ceil(count / page_size)`.
///
/// Zero items means zero pages (not one empty page).
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Items `[(page-1)*page_size, page*page_size)` clamped to `items`.
///
/// The last page may be short; a page past the end (or page 0) is empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// 1-based positions of the first and last item shown on `page`.
///
/// Returns `None` when the page holds no items.
pub fn item_range(count: usize, page: usize, page_size: usize) -> Option<(usize, usize)> {
    if page == 0 || page_size == 0 {
        return None;
    }
    let first = (page - 1).saturating_mul(page_size).saturating_add(1);
    if first > count {
        return None;
    }
    let last = page.saturating_mul(page_size).min(count);
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn total_pages_of_nothing_is_zero() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(0, 1), 0);
    }

    #[test]
    fn total_pages_with_zero_page_size_is_zero() {
        assert_eq!(total_pages(25, 0), 0);
    }

    #[test]
    fn paginate_full_pages() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), (1..=10).collect::<Vec<_>>().as_slice());
        assert_eq!(paginate(&items, 2, 10), (11..=20).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn paginate_short_last_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn paginate_past_end_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
    }

    #[test]
    fn paginate_page_zero_is_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 10).is_empty());
    }

    #[test]
    fn paginate_empty_input() {
        let items: [u8; 0] = [];
        assert!(paginate(&items, 1, 10).is_empty());
    }

    #[test]
    fn item_range_reports_visible_positions() {
        assert_eq!(item_range(25, 1, 10), Some((1, 10)));
        assert_eq!(item_range(25, 3, 10), Some((21, 25)));
        assert_eq!(item_range(5, 1, 10), Some((1, 5)));
    }

    #[test]
    fn item_range_none_when_page_is_empty() {
        assert_eq!(item_range(0, 1, 10), None);
        assert_eq!(item_range(25, 4, 10), None);
        assert_eq!(item_range(25, 0, 10), None);
    }
}
