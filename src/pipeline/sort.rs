//! Sort stage of the pipeline. Sorting never touches its input: it copies
//! the filtered sequence and orders the copy with a stable sort, so entries
//! that compare equal under the active key keep their original relative
//! order. Ties are common (many entries share a category), which is why the
//! stability guarantee is part of the contract rather than an implementation
//! detail.

use std::cmp::Ordering;

use crate::models::Entry;

use super::state::SortKey;

/// Order two strings the way an English-collated dictionary listing would:
/// case-insensitively first, with a case-sensitive comparison only to break
/// exact case-folded ties. This keeps `"apple"` ahead of `"Banana"` where a
/// plain byte comparison would not.
pub fn compare_english(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded != Ordering::Equal {
        return folded;
    }
    a.cmp(b)
}

/// Element-by-element comparison of two tag lists. The first index where the
/// lists differ decides; when one list is a strict prefix of the other, the
/// shorter list sorts first.
fn compare_pos(a: &[String], b: &[String]) -> Ordering {
    for (left, right) in a.iter().zip(b.iter()) {
        match compare_english(left, right) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}

/// Produce a new sequence ordered by `key`, leaving `entries` untouched.
pub fn sort_entries<'a>(entries: &[&'a Entry], key: SortKey) -> Vec<&'a Entry> {
    let mut sorted = entries.to_vec();
    match key {
        SortKey::Id => sorted.sort_by_key(|entry| entry.id),
        SortKey::Word => sorted.sort_by(|a, b| compare_english(&a.word, &b.word)),
        SortKey::Category => {
            sorted.sort_by(|a, b| compare_english(a.category_text(), b.category_text()))
        }
        SortKey::PartOfSpeech => {
            sorted.sort_by(|a, b| compare_pos(&a.parts_of_speech, &b.parts_of_speech))
        }
        SortKey::Definition => {
            sorted.sort_by(|a, b| compare_english(&a.definition, &b.definition))
        }
    }
    sorted
}
