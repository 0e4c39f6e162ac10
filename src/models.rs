//! Domain models shared by the pipeline and the TUI. The intent is that these
//! types stay light-weight data holders so other layers can focus on
//! filtering, sorting, and presentation logic. Keeping the commentary here
//! means later refactors can reconstruct the assumptions even if other
//! context is lost.

use std::fmt;

#[derive(Debug, Clone)]
/// One glossary record. The collection of entries is loaded once at startup
/// and never mutated afterwards; every derived view (filtered, sorted, paged)
/// is a fresh sequence of references into it.
pub struct Entry {
    /// Unique identifier supplied by the dataset. Doubles as the default sort
    /// key and as the stable tiebreak, since no two entries share an id.
    pub id: u64,
    /// Headword displayed in lists and searched against.
    pub word: String,
    /// Definition text, shown on the card and searched against.
    pub definition: String,
    /// Optional coarse grouping. `None` means the entry carries no category
    /// and will never match a specific category filter. Empty strings in the
    /// dataset are collapsed to `None` at load time so downstream code never
    /// has to distinguish the two.
    pub category: Option<String>,
    /// Part-of-speech tags, normalized at load time from the dataset's
    /// "one string, list, or absent" shape into an ordered list of non-empty
    /// strings. May be empty.
    pub parts_of_speech: Vec<String>,
}

impl Entry {
    /// The category as a plain string slice, with `None` flattened to the
    /// empty string. Sorting treats a missing category exactly like `""`, so
    /// every comparison site funnels through this accessor.
    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Entry {
    /// Write the headword to any formatter. Display is implemented so the
    /// type plays nicely with Ratatui widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
