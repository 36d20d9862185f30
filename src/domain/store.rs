//! The in-memory entry store, single source of truth for the session

use crate::domain::entry::{EntryId, JournalEntry};
use crate::domain::filter::FilterMode;
use chrono::Local;

/// What a mutation did, delivered to observers synchronously after the
/// store state has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Inserted(EntryId),
    Updated(EntryId),
    Removed(EntryId),
    BookmarkToggled(EntryId),
    FilterChanged(FilterMode),
    SearchChanged,
}

type Observer = Box<dyn FnMut(&StoreChange)>;

/// Owns the authoritative ordered collection of journal entries and the
/// current view parameters (search text and filter mode).
///
/// Entries are held in insertion order with the newest at the front. The
/// visible list is derived on demand; every mutation notifies subscribed
/// observers and bumps a revision counter so pull-based consumers can
/// detect changes. Operations are total: an unknown id is silently
/// ignored, never an error.
pub struct EntryStore {
    entries: Vec<JournalEntry>,
    search_text: String,
    filter_mode: FilterMode,
    next_id: u64,
    revision: u64,
    observers: Vec<Observer>,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EntryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryStore")
            .field("entries", &self.entries)
            .field("search_text", &self.search_text)
            .field("filter_mode", &self.filter_mode)
            .field("revision", &self.revision)
            .finish()
    }
}

impl EntryStore {
    pub fn new() -> Self {
        EntryStore {
            entries: Vec::new(),
            search_text: String::new(),
            filter_mode: FilterMode::All,
            next_id: 1,
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// All entries, insertion order, unaffected by filter and search.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Bumped once per effective mutation. No-ops leave it untouched.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Attach an observer, called synchronously after each mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreChange) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Derive the visible list: filter (or sort) first, then search.
    ///
    /// `Bookmarked` retains bookmarked entries, `Newest` sorts the working
    /// set descending by date (stable, so equal dates keep insertion
    /// order), `All` passes everything through. A non-empty search text
    /// then retains entries matching it case-insensitively on title or
    /// content; search never reorders.
    pub fn visible_entries(&self) -> Vec<&JournalEntry> {
        let mut visible: Vec<&JournalEntry> = match self.filter_mode {
            FilterMode::All => self.entries.iter().collect(),
            FilterMode::Bookmarked => self.entries.iter().filter(|e| e.bookmarked).collect(),
            FilterMode::Newest => {
                let mut sorted: Vec<&JournalEntry> = self.entries.iter().collect();
                sorted.sort_by(|a, b| b.date.cmp(&a.date));
                sorted
            }
        };

        if !self.search_text.is_empty() {
            visible.retain(|e| e.matches(&self.search_text));
        }

        visible
    }

    /// Create or update an entry from the editor's buffers.
    ///
    /// Both inputs are trimmed. When both trim empty nothing happens and
    /// `None` is returned. A resolving `target` is updated in place
    /// (position and bookmark flag preserved, date reset to now); an
    /// absent or unresolvable target inserts a fresh entry at the front.
    /// An empty trimmed title becomes "Untitled".
    pub fn upsert(
        &mut self,
        target: Option<EntryId>,
        title: &str,
        content: &str,
    ) -> Option<EntryId> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() && content.is_empty() {
            return None;
        }

        let title = if title.is_empty() {
            JournalEntry::UNTITLED.to_string()
        } else {
            title.to_string()
        };

        if let Some(entry) = target.and_then(|id| self.entries.iter_mut().find(|e| e.id == id)) {
            entry.title = title;
            entry.content = content.to_string();
            entry.date = Local::now();
            let id = entry.id;
            self.notify(StoreChange::Updated(id));
            return Some(id);
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries
            .insert(0, JournalEntry::new(id, title, content.to_string()));
        self.notify(StoreChange::Inserted(id));
        Some(id)
    }

    /// Remove the entry with the matching id. Unknown ids are ignored.
    pub fn delete(&mut self, id: EntryId) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.notify(StoreChange::Removed(id));
        }
    }

    /// Flip the bookmark flag on the matching entry. Unknown ids are ignored.
    pub fn toggle_bookmark(&mut self, id: EntryId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.bookmarked = !entry.bookmarked;
            self.notify(StoreChange::BookmarkToggled(id));
        }
    }

    /// Change the filter mode for subsequent `visible_entries` calls.
    pub fn set_filter(&mut self, mode: FilterMode) {
        if self.filter_mode != mode {
            self.filter_mode = mode;
            self.notify(StoreChange::FilterChanged(mode));
        }
    }

    /// Change the search text for subsequent `visible_entries` calls.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.search_text != text {
            self.search_text = text;
            self.notify(StoreChange::SearchChanged);
        }
    }

    /// Test hook: direct entry access for scrambling dates, bypassing the
    /// upsert rules. Not part of the store's contract.
    #[cfg(test)]
    pub(crate) fn entry_mut(&mut self, id: EntryId) -> Option<&mut JournalEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    fn notify(&mut self, change: StoreChange) {
        self.revision += 1;
        for observer in &mut self.observers {
            observer(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_with(titles: &[&str]) -> EntryStore {
        let mut store = EntryStore::new();
        for title in titles {
            store.upsert(None, title, "");
        }
        store
    }

    /// Shift an entry's date so ordering tests don't depend on wall-clock
    /// resolution between successive upserts.
    fn backdate(store: &mut EntryStore, id: EntryId, hours: i64) {
        let entry = store.entries.iter_mut().find(|e| e.id == id).unwrap();
        entry.date -= Duration::hours(hours);
    }

    #[test]
    fn test_upsert_inserts_at_front() {
        let mut store = EntryStore::new();
        let first = store.upsert(None, "First", "").unwrap();
        let second = store.upsert(None, "Second", "").unwrap();

        let titles: Vec<&str> = store.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_upsert_new_entry_defaults() {
        let mut store = EntryStore::new();
        let id = store.upsert(None, "My Day", "").unwrap();

        let entry = store.get(id).unwrap();
        assert_eq!(entry.title, "My Day");
        assert_eq!(entry.content, "");
        assert!(!entry.bookmarked);
        assert!(Local::now().signed_duration_since(entry.date) < Duration::seconds(5));
    }

    #[test]
    fn test_upsert_blank_is_noop() {
        let mut store = EntryStore::new();
        assert_eq!(store.upsert(None, "", ""), None);
        assert_eq!(store.upsert(None, "", "  "), None);
        assert_eq!(store.upsert(None, " \t\n", " "), None);
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_upsert_trims_whitespace() {
        let mut store = EntryStore::new();
        let id = store.upsert(None, "  Trip  ", "  the coast  ").unwrap();

        let entry = store.get(id).unwrap();
        assert_eq!(entry.title, "Trip");
        assert_eq!(entry.content, "the coast");
    }

    #[test]
    fn test_upsert_untitled_default() {
        let mut store = EntryStore::new();
        let id = store.upsert(None, "  ", "some thoughts").unwrap();
        assert_eq!(store.get(id).unwrap().title, "Untitled");
    }

    #[test]
    fn test_upsert_updates_in_place() {
        let mut store = store_with(&["First", "Second", "Third"]);
        let target = store.entries()[1].id;
        let old_date = store.get(target).unwrap().date;

        let id = store.upsert(Some(target), "New Title", "New Body").unwrap();

        assert_eq!(id, target);
        let titles: Vec<&str> = store.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "New Title", "First"]);
        let entry = store.get(target).unwrap();
        assert_eq!(entry.content, "New Body");
        assert!(entry.date >= old_date);
    }

    #[test]
    fn test_upsert_update_preserves_bookmark() {
        let mut store = store_with(&["First"]);
        let id = store.entries()[0].id;
        store.toggle_bookmark(id);

        store.upsert(Some(id), "Renamed", "body");
        assert!(store.get(id).unwrap().bookmarked);
    }

    #[test]
    fn test_upsert_unresolvable_target_inserts() {
        let mut store = store_with(&["First"]);
        let ghost = EntryId(999);

        let id = store.upsert(Some(ghost), "Second", "").unwrap();

        assert_ne!(id, ghost);
        assert_eq!(store.entries().len(), 2);
        assert_eq!(store.entries()[0].id, id);
    }

    #[test]
    fn test_ids_pairwise_distinct() {
        let mut store = EntryStore::new();
        for i in 0..10 {
            store.upsert(None, &format!("Entry {}", i), "");
        }
        let first = store.entries()[9].id;
        store.delete(first);
        store.upsert(None, "After delete", "");

        let mut ids: Vec<EntryId> = store.entries().iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.entries().len());
    }

    #[test]
    fn test_delete_removes_entry() {
        let mut store = store_with(&["First", "Second"]);
        let id = store.entries()[0].id;

        store.delete(id);

        assert_eq!(store.entries().len(), 1);
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = store_with(&["First", "Second"]);
        let snapshot: Vec<JournalEntry> = store.entries().to_vec();
        let revision = store.revision();

        store.delete(EntryId(999));

        assert_eq!(store.entries(), snapshot.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_toggle_bookmark_roundtrip() {
        let mut store = store_with(&["First", "Second"]);
        let id = store.entries()[0].id;
        let other = store.entries()[1].id;

        store.toggle_bookmark(id);
        assert!(store.get(id).unwrap().bookmarked);
        assert!(!store.get(other).unwrap().bookmarked);

        store.toggle_bookmark(id);
        assert!(!store.get(id).unwrap().bookmarked);
        assert!(!store.get(other).unwrap().bookmarked);
    }

    #[test]
    fn test_toggle_bookmark_unknown_id_is_noop() {
        let mut store = store_with(&["First"]);
        let revision = store.revision();
        store.toggle_bookmark(EntryId(999));
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_visible_all_keeps_insertion_order() {
        let store = store_with(&["First", "Second", "Third"]);
        let titles: Vec<&str> = store
            .visible_entries()
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[test]
    fn test_visible_bookmarked_only() {
        let mut store = store_with(&["First", "Second", "Third"]);
        let id = store.entries()[1].id;
        store.toggle_bookmark(id);
        store.set_filter(FilterMode::Bookmarked);

        let visible = store.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, id);
    }

    #[test]
    fn test_visible_newest_sorts_by_date_descending() {
        let mut store = store_with(&["Oldest", "Middle", "Newest"]);
        // Insertion order is Newest, Middle, Oldest; scramble the dates so
        // the sort has real work to do.
        let oldest = store.entries()[2].id;
        let middle = store.entries()[1].id;
        backdate(&mut store, oldest, 48);
        backdate(&mut store, middle, 24);

        store.set_filter(FilterMode::Newest);
        let titles: Vec<&str> = store
            .visible_entries()
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_visible_newest_stable_for_equal_dates() {
        let mut store = store_with(&["First", "Second", "Third"]);
        let date = store.entries()[0].date;
        for entry in store.entries.iter_mut() {
            entry.date = date;
        }

        store.set_filter(FilterMode::Newest);
        let titles: Vec<&str> = store
            .visible_entries()
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let mut store = EntryStore::new();
        store.upsert(None, "My Day", "");
        store.upsert(None, "Night Walk", "");

        store.set_search_text("day");
        let visible = store.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "My Day");
    }

    #[test]
    fn test_search_matches_content_too() {
        let mut store = EntryStore::new();
        store.upsert(None, "Morning", "coffee at the pier");
        store.upsert(None, "Evening", "reading");

        store.set_search_text("PIER");
        let visible = store.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Morning");
    }

    #[test]
    fn test_search_applies_after_filter() {
        let mut store = store_with(&["Harbour walk", "Harbour market", "Forest"]);
        let market = store.entries()[1].id;
        store.toggle_bookmark(market);

        store.set_filter(FilterMode::Bookmarked);
        store.set_search_text("harbour");

        let visible = store.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, market);
    }

    #[test]
    fn test_clearing_search_restores_full_list() {
        let mut store = store_with(&["My Day", "Night Walk"]);
        store.set_search_text("day");
        assert_eq!(store.visible_entries().len(), 1);

        store.set_search_text("");
        assert_eq!(store.visible_entries().len(), 2);
    }

    #[test]
    fn test_observer_notified_once_per_mutation() {
        let changes: Rc<RefCell<Vec<StoreChange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);

        let mut store = EntryStore::new();
        store.subscribe(move |change| sink.borrow_mut().push(*change));

        let id = store.upsert(None, "First", "").unwrap();
        store.toggle_bookmark(id);
        store.set_filter(FilterMode::Newest);
        store.set_search_text("x");
        store.delete(id);

        assert_eq!(
            *changes.borrow(),
            vec![
                StoreChange::Inserted(id),
                StoreChange::BookmarkToggled(id),
                StoreChange::FilterChanged(FilterMode::Newest),
                StoreChange::SearchChanged,
                StoreChange::Removed(id),
            ]
        );
    }

    #[test]
    fn test_observer_not_notified_for_noops() {
        let count = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&count);

        let mut store = EntryStore::new();
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.upsert(None, "", "   ");
        store.delete(EntryId(42));
        store.toggle_bookmark(EntryId(42));
        store.set_filter(FilterMode::All); // already All
        store.set_search_text(""); // already empty

        assert_eq!(*count.borrow(), 0);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut store = EntryStore::new();
        let id = store.upsert(None, "First", "").unwrap();
        assert_eq!(store.revision(), 1);

        store.upsert(Some(id), "Renamed", "");
        assert_eq!(store.revision(), 2);

        store.set_search_text("r");
        store.set_search_text("r"); // unchanged, no bump
        assert_eq!(store.revision(), 3);
    }
}
