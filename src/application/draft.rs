//! Entry draft use case - the editor sheet's working state

use crate::domain::{EntryId, EntryStore, JournalEntry};

/// Working buffers for the editor sheet.
///
/// A draft either targets an existing entry (begun from a selected row)
/// or none (a new entry). It keeps a snapshot of the buffers as they were
/// when editing began, so the UI can tell a clean cancel from one that
/// would discard changes. Saving delegates to the store's upsert, which
/// owns the trimming, "Untitled", and blank-is-a-no-op rules.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub target: Option<EntryId>,
    pub title: String,
    pub content: String,
    saved_title: String,
    saved_content: String,
}

impl EntryDraft {
    /// Start a draft for a new entry, all buffers empty.
    pub fn new_entry() -> Self {
        EntryDraft {
            target: None,
            title: String::new(),
            content: String::new(),
            saved_title: String::new(),
            saved_content: String::new(),
        }
    }

    /// Start a draft editing an existing entry, buffers pre-filled.
    pub fn edit(entry: &JournalEntry) -> Self {
        EntryDraft {
            target: Some(entry.id),
            title: entry.title.clone(),
            content: entry.content.clone(),
            saved_title: entry.title.clone(),
            saved_content: entry.content.clone(),
        }
    }

    /// True when both buffers trim to empty; saving would be a no-op.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// True when a buffer has diverged from its state at editing start.
    pub fn is_dirty(&self) -> bool {
        self.title != self.saved_title || self.content != self.saved_content
    }

    /// Initial focus goes to the title field only while it is empty.
    pub fn starts_in_title(&self) -> bool {
        self.title.is_empty()
    }

    /// Commit the draft to the store. Returns the affected entry's id, or
    /// `None` when the draft was blank and nothing changed.
    pub fn save(&self, store: &mut EntryStore) -> Option<EntryId> {
        store.upsert(self.target, &self.title, &self.content)
    }
}
