//! Pagination stage of the pipeline. Slicing is bounds-checked here, but the
//! page number itself is the caller's responsibility: the UI clamps to
//! `[1, total_pages]` before asking for a slice, and the prev/next controls
//! reject requests past either boundary instead of wrapping.

use crate::models::Entry;

/// Everything the render layer needs for one screenful: the visible slice
/// plus the page arithmetic for the `Page X of Y` label and the arrow
/// enable/disable states.
#[derive(Debug)]
pub struct PageView<'a> {
    /// Entries on the current page, in final display order.
    pub entries: Vec<&'a Entry>,
    /// The 1-based page this view was built for.
    pub page: usize,
    /// Total page count, reported as 1 for an empty result set so the page
    /// label stays sane.
    pub total_pages: usize,
    /// How many entries survived filtering, across all pages.
    pub matches: usize,
}

impl PageView<'_> {
    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a further page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Total page count for a result set: `ceil(len / page_size)`, floored at 1
/// so an empty result still reads as page 1 of 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(page_size)
    }
}

/// Cut the `[(page-1)*size, min(page*size, len))` window out of the sorted
/// sequence. `page_size` must be positive; `page` is expected to be in range
/// already, and an overshooting page simply yields an empty slice rather
/// than panicking.
pub fn paginate<'a>(sorted: &[&'a Entry], page: usize, page_size: usize) -> PageView<'a> {
    debug_assert!(page_size > 0);
    debug_assert!(page >= 1);

    let len = sorted.len();
    let start = (page.saturating_sub(1)).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);

    PageView {
        entries: sorted[start..end].to_vec(),
        page,
        total_pages: total_pages(len, page_size),
        matches: len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64) -> Entry {
        Entry {
            id,
            word: format!("word-{id}"),
            definition: format!("definition {id}"),
            category: None,
            parts_of_speech: Vec::new(),
        }
    }

    fn ids(view: &PageView<'_>) -> Vec<u64> {
        view.entries.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn pages_concatenate_to_the_full_sequence_without_gaps_or_overlaps() {
        let entries: Vec<Entry> = (1..=23).map(entry).collect();
        let refs: Vec<&Entry> = entries.iter().collect();
        let page_size = 5;
        let total = total_pages(refs.len(), page_size);
        assert_eq!(total, 5);

        let mut rebuilt = Vec::new();
        for page in 1..=total {
            rebuilt.extend(ids(&paginate(&refs, page, page_size)));
        }
        let expected: Vec<u64> = (1..=23).collect();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let entries: Vec<Entry> = (1..=7).map(entry).collect();
        let refs: Vec<&Entry> = entries.iter().collect();
        let view = paginate(&refs, 3, 3);
        assert_eq!(ids(&view), vec![7]);
        assert_eq!(view.total_pages, 3);
        assert!(view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn empty_result_renders_as_page_one_of_one_with_both_arrows_off() {
        let refs: Vec<&Entry> = Vec::new();
        let view = paginate(&refs, 1, 50);
        assert!(view.entries.is_empty());
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.matches, 0);
        assert!(!view.has_prev());
        assert!(!view.has_next());
    }
}
