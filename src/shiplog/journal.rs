//! Pure transformations over entry collections.
//!
//! Each function takes the current snapshot and returns a fresh one (or, for
//! [`search`], a display-only view). Nothing here mutates its input or
//! performs I/O; persisting the result is the caller's decision. Collections
//! are ordered newest-first, and positions are 1-based with 1 = newest,
//! recomputed from the current order on every call.

use crate::clock::{format_timestamp, Clock};
use crate::error::{Result, ShiplogError};
use crate::model::Entry;

/// Prepend a new entry with the given text, stamped from `clock`.
///
/// The text is trimmed first; if nothing remains, fails with
/// [`ShiplogError::EmptyEntry`] and the input collection stands unchanged.
pub fn add<C: Clock>(entries: &[Entry], raw_text: &str, clock: &C) -> Result<Vec<Entry>> {
    let text = raw_text.trim();
    if text.is_empty() {
        return Err(ShiplogError::EmptyEntry);
    }

    let entry = Entry::new(format_timestamp(clock.now()), text.to_string());
    let mut updated = Vec::with_capacity(entries.len() + 1);
    updated.push(entry);
    updated.extend_from_slice(entries);
    Ok(updated)
}

/// Remove the entry at the given 1-based position.
///
/// Returns `None` when the position is invalid (zero, past the end, or the
/// collection is empty) — a soft failure: the original collection stands and
/// the caller decides whether that warrants a message or an exit code.
pub fn delete(entries: &[Entry], index: usize) -> Option<Vec<Entry>> {
    if index == 0 || index > entries.len() {
        return None;
    }

    let mut updated = entries.to_vec();
    updated.remove(index - 1);
    Some(updated)
}

/// Filter entries whose text contains `query`, case-insensitively.
///
/// A query that is empty after trimming applies no filter: the collection
/// comes back as-is, so callers can compare against the input to detect "no
/// filter applied". The result preserves relative order and is never
/// persisted.
pub fn search(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.trim().is_empty() {
        return entries.to_vec();
    }

    // Only the emptiness test trims; matching uses the query as given, so
    // padding in the query is significant.
    let query_lower = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.text.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::fixed::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at(2024, 1, 2, 3, 4, 5)
    }

    fn populated() -> Vec<Entry> {
        let c = clock();
        let entries = add(&[], "first", &c).unwrap();
        let entries = add(&entries, "second", &c).unwrap();
        add(&entries, "third", &c).unwrap()
    }

    #[test]
    fn add_prepends_trimmed_text_with_timestamp() {
        let entries = add(&[], "  hello world  ", &clock()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "hello world");
        assert_eq!(entries[0].timestamp, "2024-01-02 03:04:05");
    }

    #[test]
    fn add_keeps_existing_entries_in_order() {
        let entries = populated();
        let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["third", "second", "first"]);
    }

    #[test]
    fn add_rejects_empty_and_whitespace_text() {
        let before = populated();
        for raw in ["", "   ", "\t\n"] {
            let err = add(&before, raw, &clock()).unwrap_err();
            assert!(matches!(err, ShiplogError::EmptyEntry));
        }
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn delete_removes_only_the_addressed_position() {
        let entries = populated();
        let updated = delete(&entries, 2).unwrap();
        let texts: Vec<_> = updated.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["third", "first"]);
    }

    #[test]
    fn delete_newest_and_oldest_positions() {
        let entries = populated();
        assert_eq!(delete(&entries, 1).unwrap()[0].text, "second");
        let remaining = delete(&entries, 3).unwrap();
        assert_eq!(remaining.last().unwrap().text, "second");
    }

    #[test]
    fn delete_out_of_range_is_a_soft_failure() {
        let entries = populated();
        assert!(delete(&entries, 0).is_none());
        assert!(delete(&entries, 4).is_none());
        assert!(delete(&[], 1).is_none());
        assert_eq!(entries, populated());
    }

    #[test]
    fn search_blank_query_returns_collection_unchanged() {
        let entries = populated();
        assert_eq!(search(&entries, ""), entries);
        assert_eq!(search(&entries, "   "), entries);
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let entries = populated();
        let matches = search(&entries, "FIRST");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "first");
    }

    #[test]
    fn search_preserves_relative_order() {
        let entries = populated();
        let matches = search(&entries, "ir");
        let texts: Vec<_> = matches.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["third", "first"]);
    }

    #[test]
    fn search_keeps_padding_in_the_query_significant() {
        let entries = add(&[], "apple pie", &clock()).unwrap();
        assert!(search(&entries, "pie ").is_empty());
        assert_eq!(search(&entries, " pie").len(), 1);
    }

    #[test]
    fn search_with_no_matches_is_empty() {
        assert!(search(&populated(), "zebra").is_empty());
    }
}
