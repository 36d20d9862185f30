//! Journal entry model

use chrono::{DateTime, Local};

/// Opaque identifier for a journal entry.
///
/// Assigned by the store at creation and never reused within a session.
/// All lookups (edit, delete, bookmark) go through this id rather than a
/// position in the list, so reordering the visible list cannot retarget
/// an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single journal record.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    /// Creation time, reset whenever the entry is edited and saved.
    pub date: DateTime<Local>,
    pub bookmarked: bool,
}

impl JournalEntry {
    /// Title shown when the user saved content without one.
    pub const UNTITLED: &'static str = "Untitled";

    pub(crate) fn new(id: EntryId, title: String, content: String) -> Self {
        JournalEntry {
            id,
            title,
            content,
            date: Local::now(),
            bookmarked: false,
        }
    }

    /// Case-insensitive substring match against title or content.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_title_case_insensitive() {
        let entry = JournalEntry::new(EntryId(1), "My Day".to_string(), String::new());
        assert!(entry.matches("day"));
        assert!(entry.matches("MY"));
        assert!(!entry.matches("night"));
    }

    #[test]
    fn test_matches_content() {
        let entry = JournalEntry::new(
            EntryId(1),
            "Walk".to_string(),
            "Went to the Harbour".to_string(),
        );
        assert!(entry.matches("harbour"));
        assert!(entry.matches("HARBOUR"));
    }

    #[test]
    fn test_display_id() {
        assert_eq!(EntryId(7).to_string(), "#7");
    }
}
