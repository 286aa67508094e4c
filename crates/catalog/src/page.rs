//! Pagination stage: fixed-size offset pages over an ordered sequence.

use serde::{Deserialize, Serialize};

/// Number of products shown per catalog page.
pub const PAGE_SIZE: usize = 8;

/// Page position and totals for one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Matches across all pages (counted before slicing).
    pub total_count: usize,
    /// 1-based page number actually served.
    pub page_number: u64,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl PageMetadata {
    pub fn new(total_count: usize, page_number: u64, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size);
        Self {
            total_count,
            page_number,
            page_size,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages as u64,
        }
    }
}

/// One slice of an ordered sequence plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

/// Clamp a caller-supplied page number to the first page when it is not positive.
pub fn normalize_page(requested: i64) -> u64 {
    if requested < 1 { 1 } else { requested as u64 }
}

/// Slice `items` into page `requested` of `page_size` elements.
///
/// Pages past the end are empty, not an error.
pub fn paginate<T>(items: Vec<T>, requested: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page_number = normalize_page(requested);
    let total_count = items.len();

    let offset = usize::try_from(page_number - 1)
        .ok()
        .and_then(|p| p.checked_mul(page_size))
        .unwrap_or(usize::MAX);

    let items = items.into_iter().skip(offset).take(page_size).collect();

    Page {
        items,
        metadata: PageMetadata::new(total_count, page_number, page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_is_full_and_counts_everything() {
        let page = paginate(seq(20), 1, PAGE_SIZE);
        assert_eq!(page.items, (0..8).collect::<Vec<_>>());
        assert_eq!(page.metadata.total_count, 20);
        assert_eq!(page.metadata.total_pages, 3);
        assert!(!page.metadata.has_previous_page);
        assert!(page.metadata.has_next_page);
    }

    #[test]
    fn last_page_may_be_short() {
        let page = paginate(seq(20), 3, PAGE_SIZE);
        assert_eq!(page.items, vec![16, 17, 18, 19]);
        assert!(page.metadata.has_previous_page);
        assert!(!page.metadata.has_next_page);
    }

    #[test]
    fn out_of_range_page_is_empty_without_error() {
        let page = paginate(seq(3), 99, PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_count, 3);
        assert_eq!(page.metadata.page_number, 99);
        assert_eq!(page.metadata.total_pages, 1);
    }

    #[test]
    fn non_positive_pages_are_clamped_to_first() {
        for requested in [0, -1, i64::MIN] {
            let page = paginate(seq(10), requested, PAGE_SIZE);
            assert_eq!(page.metadata.page_number, 1);
            assert_eq!(page.items.len(), 8);
        }
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let page = paginate(seq(10), i64::MAX, PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_count, 10);
    }

    #[test]
    fn empty_sequence_has_zero_pages() {
        let page = paginate(Vec::<usize>::new(), 1, PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_pages, 0);
        assert!(!page.metadata.has_next_page);
    }
}
