//! Filter stage of the pipeline: a boolean predicate over the full entry
//! collection. There is no ranking or scoring; an entry is either in or out,
//! and the output keeps the collection's original relative order.

use crate::models::Entry;

use super::state::BrowseState;

/// Apply the active search, category, and tag filters. An entry passes only
/// when every active filter matches; an inactive filter (empty search, `All`
/// category, empty tag set) passes everything.
pub fn filter_entries<'a>(entries: &'a [Entry], state: &BrowseState) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| {
            matches_search(entry, &state.search)
                && state.category.matches(entry.category.as_deref())
                && matches_tags(entry, state)
        })
        .collect()
}

/// Case-insensitive substring match against the headword or the definition.
/// `term` is already lowercase (`BrowseState::set_search` folds it).
fn matches_search(entry: &Entry, term: &str) -> bool {
    term.is_empty()
        || entry.word.to_lowercase().contains(term)
        || entry.definition.to_lowercase().contains(term)
}

/// OR-match across the selected tag set: one shared tag is enough. An empty
/// selection disables the tag filter entirely.
fn matches_tags(entry: &Entry, state: &BrowseState) -> bool {
    state.tags.is_empty()
        || entry
            .parts_of_speech
            .iter()
            .any(|tag| state.tags.contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CategoryFilter;

    fn entry(id: u64, word: &str, category: Option<&str>, pos: &[&str], definition: &str) -> Entry {
        Entry {
            id,
            word: word.to_string(),
            definition: definition.to_string(),
            category: category.map(str::to_string),
            parts_of_speech: pos.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry(1, "cat", Some("noun"), &["n"], "a feline"),
            entry(2, "dog", Some("noun"), &["n", "v"], "a canine"),
            entry(3, "run", Some("verb"), &["v"], "to move fast"),
            entry(4, "alas", None, &[], "a cry of grief"),
        ]
    }

    fn ids(filtered: &[&Entry]) -> Vec<u64> {
        filtered.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn default_state_is_identity_in_order_and_length() {
        let entries = sample();
        let state = BrowseState::default();
        assert_eq!(ids(&filter_entries(&entries, &state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_matches_word_or_definition_case_insensitively() {
        let entries = sample();
        let mut state = BrowseState::default();

        state.set_search("CANINE");
        assert_eq!(ids(&filter_entries(&entries, &state)), vec![2]);

        state.set_search("a");
        for found in filter_entries(&entries, &state) {
            assert!(
                found.word.to_lowercase().contains('a')
                    || found.definition.to_lowercase().contains('a')
            );
        }

        state.set_search("no such text");
        assert!(filter_entries(&entries, &state).is_empty());
    }

    #[test]
    fn category_filter_is_exact_and_skips_uncategorized() {
        let entries = sample();
        let mut state = BrowseState::default();
        state.select_category(CategoryFilter::Only("noun".into()));
        assert_eq!(ids(&filter_entries(&entries, &state)), vec![1, 2]);

        state.select_category(CategoryFilter::Only("nou".into()));
        assert!(filter_entries(&entries, &state).is_empty());
    }

    #[test]
    fn tag_set_or_matches_any_selected_tag() {
        let entries = sample();
        let mut state = BrowseState::default();
        state.toggle_tag("v");
        // dog matches because one of its two tags is "v".
        assert_eq!(ids(&filter_entries(&entries, &state)), vec![2, 3]);

        state.toggle_tag("n");
        assert_eq!(ids(&filter_entries(&entries, &state)), vec![1, 2, 3]);

        for found in filter_entries(&entries, &state) {
            assert!(found
                .parts_of_speech
                .iter()
                .any(|tag| state.tags.contains(tag)));
        }
    }

    #[test]
    fn all_active_filters_must_agree() {
        let entries = sample();
        let mut state = BrowseState::default();
        state.set_search("a");
        state.select_category(CategoryFilter::Only("noun".into()));
        state.toggle_tag("v");
        assert_eq!(ids(&filter_entries(&entries, &state)), vec![2]);
    }
}
