//! Pagination for the journal grid
//!
//! Fixed page size with an ellipsis-compressed page-number strip: first
//! and last pages always show, a window of one page either side of the
//! current page, and ellipsis markers where the strip skips.

/// Journal grid page size
pub const PAGE_SIZE: usize = 6;

/// Debounce applied to the journal search bar (the gallery search has none)
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// One slot in the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Build the compressed page-number strip around `current` (1-based).
///
/// The strip the UI hides entirely when there is at most one page.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageEntry> {
    if total == 0 {
        return Vec::new();
    }

    let mut entries = vec![PageEntry::Page(1)];

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total.saturating_sub(1));

    if start > 2 {
        entries.push(PageEntry::Ellipsis);
    }
    for page in start..=end {
        entries.push(PageEntry::Page(page));
    }
    if end + 1 < total {
        entries.push(PageEntry::Ellipsis);
    }
    if total > 1 {
        entries.push(PageEntry::Page(total));
    }

    entries
}

/// Slice out the current page, clamping `current` into range
pub fn page_slice<T>(items: &[T], current: usize, page_size: usize) -> &[T] {
    if items.is_empty() {
        return items;
    }
    let total = total_pages(items.len(), page_size);
    let page = current.clamp(1, total);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageEntry::{Ellipsis, Page};

    #[test]
    fn test_small_strip_has_no_ellipsis() {
        assert_eq!(
            page_numbers(2, 3),
            vec![Page(1), Page(2), Page(3)]
        );
    }

    #[test]
    fn test_middle_page_compresses_both_sides() {
        assert_eq!(
            page_numbers(5, 9),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn test_first_page_compresses_tail_only() {
        assert_eq!(
            page_numbers(1, 9),
            vec![Page(1), Page(2), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn test_last_page_compresses_head_only() {
        assert_eq!(
            page_numbers(9, 9),
            vec![Page(1), Ellipsis, Page(8), Page(9)]
        );
    }

    #[test]
    fn test_single_page_strip() {
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(6, PAGE_SIZE), 1);
        assert_eq!(total_pages(7, PAGE_SIZE), 2);
        assert_eq!(total_pages(13, PAGE_SIZE), 3);
    }

    #[test]
    fn test_page_slice_windows() {
        let items: Vec<usize> = (0..13).collect();
        assert_eq!(page_slice(&items, 1, 6), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&items, 2, 6), &[6, 7, 8, 9, 10, 11]);
        assert_eq!(page_slice(&items, 3, 6), &[12]);
    }

    #[test]
    fn test_page_slice_clamps_out_of_range() {
        let items: Vec<usize> = (0..13).collect();
        assert_eq!(page_slice(&items, 99, 6), &[12]);
        assert_eq!(page_slice(&items, 0, 6), &[0, 1, 2, 3, 4, 5]);
    }
}
