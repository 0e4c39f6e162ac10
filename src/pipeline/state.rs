//! Session state for the browser. All of the knobs a user can turn live in
//! one `BrowseState` struct owned by the UI, and every mutation goes through
//! a method here so the page-reset policy stays in a single place: any filter
//! or page-size change snaps back to page 1, while sort changes and page
//! navigation leave the page alone.

use std::collections::BTreeSet;

/// Page sizes offered by the UI. The browser never accepts an arbitrary
/// size; the selector cycles through these.
pub const PAGE_SIZE_CHOICES: &[usize] = &[10, 25, 50, 100];

/// Default page size on startup.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Keys the entry list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Word,
    Category,
    PartOfSpeech,
    Definition,
}

impl SortKey {
    /// Label shown in the sidebar readout.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Word => "word",
            SortKey::Category => "category",
            SortKey::PartOfSpeech => "part of speech",
            SortKey::Definition => "definition",
        }
    }

    /// The next key in the fixed cycle used by the sort shortcut.
    pub fn next(self) -> SortKey {
        match self {
            SortKey::Id => SortKey::Word,
            SortKey::Word => SortKey::Category,
            SortKey::Category => SortKey::PartOfSpeech,
            SortKey::PartOfSpeech => SortKey::Definition,
            SortKey::Definition => SortKey::Id,
        }
    }
}

/// Single-select category control: either the `all` sentinel or one exact
/// category name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Whether an entry with the given category passes this filter. Entries
    /// without a category pass `All` and fail every `Only`.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// Label shown on the radio row.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(name) => name,
        }
    }
}

/// The one mutable piece of session state. Initialized to defaults at
/// startup and reset only by explicit user action; nothing here survives a
/// restart.
#[derive(Debug, Clone)]
pub struct BrowseState {
    /// Free-text search term, kept lowercase so the filter can compare
    /// without re-folding on every entry.
    pub search: String,
    /// Selected category, `All` by default.
    pub category: CategoryFilter,
    /// Selected part-of-speech tags. Empty means no tag filter; a non-empty
    /// set OR-matches against an entry's tags.
    pub tags: BTreeSet<String>,
    /// Active sort key.
    pub sort: SortKey,
    /// Current page, 1-based. Kept within `[1, total_pages]` by the
    /// navigation methods; the pipeline never sees an out-of-range page.
    pub page: usize,
    /// Entries per page, always one of `PAGE_SIZE_CHOICES`.
    pub page_size: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            tags: BTreeSet::new(),
            sort: SortKey::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BrowseState {
    /// Replace the search term, folding it to lowercase. Resets to page 1.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_lowercase();
        self.page = 1;
    }

    /// Select a category radio. Resets to page 1.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    /// Toggle a tag checkbox, returning whether the tag is now selected.
    /// Resets to page 1.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let selected = if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        };
        self.page = 1;
        selected
    }

    /// Advance to the next sort key. The page deliberately stays put: the
    /// user is reordering the same result set, not changing it.
    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    /// Step the page size through the fixed choices, wrapping at either end.
    /// Resets to page 1 since the old page no longer maps to the same slice.
    pub fn cycle_page_size(&mut self, forward: bool) {
        let position = PAGE_SIZE_CHOICES
            .iter()
            .position(|&size| size == self.page_size)
            .unwrap_or(0);
        let count = PAGE_SIZE_CHOICES.len();
        let next = if forward {
            (position + 1) % count
        } else {
            (position + count - 1) % count
        };
        self.page_size = PAGE_SIZE_CHOICES[next];
        self.page = 1;
    }

    /// Retreat one page. Returns whether the page actually moved; at page 1
    /// the request is rejected and nothing changes.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Advance one page, clamped to the given total. Returns whether the
    /// page actually moved.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Pull the page back into `[1, total_pages]` after the result set
    /// shrinks underneath it.
    pub fn clamp_page(&mut self, total_pages: usize) {
        if self.page > total_pages {
            self.page = total_pages.max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_contract() {
        let state = BrowseState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.sort, SortKey::Id);
        assert!(state.search.is_empty());
        assert_eq!(state.category, CategoryFilter::All);
        assert!(state.tags.is_empty());
    }

    #[test]
    fn filter_changes_reset_the_page_but_sorting_does_not() {
        let mut state = BrowseState::default();
        state.page = 4;
        state.cycle_sort();
        assert_eq!(state.page, 4);

        state.set_search("Cat");
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "cat");

        state.page = 3;
        state.select_category(CategoryFilter::Only("noun".into()));
        assert_eq!(state.page, 1);

        state.page = 3;
        assert!(state.toggle_tag("v"));
        assert_eq!(state.page, 1);

        state.page = 2;
        state.cycle_page_size(true);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn tag_toggle_round_trips() {
        let mut state = BrowseState::default();
        assert!(state.toggle_tag("n"));
        assert!(state.tags.contains("n"));
        assert!(!state.toggle_tag("n"));
        assert!(state.tags.is_empty());
    }

    #[test]
    fn page_navigation_clamps_at_both_ends() {
        let mut state = BrowseState::default();
        assert!(!state.prev_page());
        assert_eq!(state.page, 1);
        assert!(state.next_page(3));
        assert!(state.next_page(3));
        assert_eq!(state.page, 3);
        assert!(!state.next_page(3));
        assert_eq!(state.page, 3);
        assert!(state.prev_page());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn page_size_cycle_wraps_both_directions() {
        let mut state = BrowseState::default();
        assert_eq!(state.page_size, 50);
        state.cycle_page_size(true);
        assert_eq!(state.page_size, 100);
        state.cycle_page_size(true);
        assert_eq!(state.page_size, 10);
        state.cycle_page_size(false);
        assert_eq!(state.page_size, 100);
    }

    #[test]
    fn sort_cycle_visits_every_key_once() {
        let mut key = SortKey::Id;
        let mut seen = vec![key];
        for _ in 0..4 {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(key.next(), SortKey::Id);
        seen.sort_by_key(|key| key.label());
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn category_filter_matching() {
        let all = CategoryFilter::All;
        let noun = CategoryFilter::Only("noun".into());
        assert!(all.matches(Some("noun")));
        assert!(all.matches(None));
        assert!(noun.matches(Some("noun")));
        assert!(!noun.matches(Some("verb")));
        assert!(!noun.matches(None));
    }
}
