//! One-time derivation of the sidebar's selectable filter values. The scan
//! runs once at startup over the full dataset; the result never changes
//! afterwards because the dataset itself never changes.

use std::collections::BTreeSet;

use crate::models::Entry;

use super::sort::compare_english;

/// Distinct, sorted category and tag values used to populate the sidebar
/// controls. The `all` sentinel is not stored here; the UI prepends it to
/// the category list when rendering.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// Scan every entry once, collecting distinct non-empty categories and
/// distinct tags across all normalized part-of-speech lists. Missing fields
/// are simply skipped; there is no error path.
pub fn derive_options(entries: &[Entry]) -> FilterOptions {
    let mut categories = BTreeSet::new();
    let mut tags = BTreeSet::new();

    for entry in entries {
        if let Some(category) = &entry.category {
            categories.insert(category.clone());
        }
        for tag in &entry.parts_of_speech {
            tags.insert(tag.clone());
        }
    }

    let mut categories: Vec<String> = categories.into_iter().collect();
    categories.sort_by(|a, b| compare_english(a, b));
    let mut tags: Vec<String> = tags.into_iter().collect();
    tags.sort_by(|a, b| compare_english(a, b));

    FilterOptions { categories, tags }
}
