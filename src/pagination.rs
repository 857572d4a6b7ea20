//! Bounded page-number window for list views.
//!
//! The backend may report thousands of pages; the console never renders more
//! than seven controls. Omitted ranges collapse into gap markers.

/// One control in the rendered pagination bar.
///
/// The two gap variants are distinct so that a view can assign stable keys
/// when both appear at once (the centered window case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A concrete zero-indexed page.
    Page(usize),
    /// Ellipsis between the first page and the centered window.
    LeadingGap,
    /// Ellipsis between the window and the last page.
    TrailingGap,
}

/// Computes the visible page controls for `current_page` out of `total_pages`.
///
/// Up to five pages are shown verbatim. Beyond that the window keeps the
/// first and last page reachable and centers on the current page:
///
/// - near the start: `0 1 2 3 … last`
/// - near the end: `0 … last-3 last-2 last-1 last`
/// - otherwise: `0 … current-1 current current+1 … last`
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    use PageToken::*;

    if total_pages <= 5 {
        return (0..total_pages).map(Page).collect();
    }

    let last = total_pages - 1;

    if current_page <= 2 {
        vec![Page(0), Page(1), Page(2), Page(3), TrailingGap, Page(last)]
    } else if current_page >= total_pages - 3 {
        vec![
            Page(0),
            LeadingGap,
            Page(last - 3),
            Page(last - 2),
            Page(last - 1),
            Page(last),
        ]
    } else {
        vec![
            Page(0),
            LeadingGap,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            TrailingGap,
            Page(last),
        ]
    }
}

/// 1-indexed bounds of the visible items, for "Showing X–Y of Z" labels.
///
/// Returns `(0, 0)` for an empty collection.
pub fn item_range(current_page: usize, page_size: usize, total_count: usize) -> (usize, usize) {
    if total_count == 0 {
        return (0, 0);
    }
    let start = current_page * page_size + 1;
    let end = ((current_page + 1) * page_size).min(total_count);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::PageToken::*;
    use super::*;

    #[test]
    fn small_totals_list_every_page() {
        for total in 0..=5 {
            for current in 0..total.max(1) {
                let expected: Vec<PageToken> = (0..total).map(Page).collect();
                assert_eq!(page_window(current, total), expected);
            }
        }
    }

    #[test]
    fn near_start_keeps_leading_block() {
        assert_eq!(
            page_window(0, 10),
            vec![Page(0), Page(1), Page(2), Page(3), TrailingGap, Page(9)]
        );
        assert_eq!(page_window(2, 10), page_window(0, 10));
    }

    #[test]
    fn near_end_keeps_trailing_block() {
        assert_eq!(
            page_window(9, 10),
            vec![Page(0), LeadingGap, Page(6), Page(7), Page(8), Page(9)]
        );
        assert_eq!(page_window(7, 10), page_window(9, 10));
    }

    #[test]
    fn middle_centers_on_current_with_two_gaps() {
        assert_eq!(
            page_window(5, 10),
            vec![
                Page(0),
                LeadingGap,
                Page(4),
                Page(5),
                Page(6),
                TrailingGap,
                Page(9)
            ]
        );
    }

    #[test]
    fn middle_gaps_are_distinguishable() {
        let window = page_window(5, 10);
        let gaps: Vec<&PageToken> = window.iter().filter(|t| !matches!(t, Page(_))).collect();
        assert_eq!(gaps, vec![&LeadingGap, &TrailingGap]);
    }

    #[test]
    fn item_range_first_page() {
        assert_eq!(item_range(0, 10, 25), (1, 10));
    }

    #[test]
    fn item_range_clamps_last_page() {
        assert_eq!(item_range(2, 10, 25), (21, 25));
    }

    #[test]
    fn item_range_empty_collection() {
        assert_eq!(item_range(0, 10, 0), (0, 0));
    }
}
