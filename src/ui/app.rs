//! Application state machine

use crate::application::EntryDraft;
use crate::domain::{EntryId, EntryStore, FilterMode, JournalEntry};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// How long the splash screen stays up before the main screen replaces it.
pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

/// Which screen fills the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Content,
}

/// The editor sheet overlay: a draft plus field focus and the
/// discard-confirmation sub-state.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub draft: EntryDraft,
    pub field: EditorField,
    pub confirm_discard: bool,
}

impl EditorState {
    /// Focus starts in the title field only while the title is empty,
    /// matching the editor's behavior when re-opening an existing entry.
    pub fn open(draft: EntryDraft) -> Self {
        let field = if draft.starts_in_title() {
            EditorField::Title
        } else {
            EditorField::Content
        };
        EditorState {
            draft,
            field,
            confirm_discard: false,
        }
    }
}

/// Holds the store and everything the render layer needs: the current
/// screen, selection, overlay states, and the quit flag.
///
/// Key events mutate this state; rendering reads it. All entry mutations
/// go through the store by id: the selected row is resolved to an
/// `EntryId` before any intent is dispatched, so reordering under the
/// `Newest` filter or an active search can never retarget an operation.
pub struct App {
    pub store: EntryStore,
    pub screen: Screen,
    pub editor: Option<EditorState>,
    pub pending_delete: Option<EntryId>,
    pub search_active: bool,
    pub selected: usize,
    pub should_quit: bool,
    splash_deadline: Option<Instant>,
}

impl App {
    pub fn new(show_splash: bool) -> Self {
        let (screen, splash_deadline) = if show_splash {
            (Screen::Splash, Some(Instant::now() + SPLASH_DURATION))
        } else {
            (Screen::Main, None)
        };

        App {
            store: EntryStore::new(),
            screen,
            editor: None,
            pending_delete: None,
            search_active: false,
            selected: 0,
            should_quit: false,
            splash_deadline,
        }
    }

    /// Advance time-driven state. The splash deadline fires exactly once;
    /// keys do not skip it.
    pub fn on_tick(&mut self, now: Instant) {
        if self.screen == Screen::Splash && self.splash_deadline.map_or(true, |d| now >= d) {
            self.screen = Screen::Main;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C quits from anywhere, splash included
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Splash => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            Screen::Main => {
                if self.editor.is_some() {
                    self.on_editor_key(key);
                } else if self.pending_delete.is_some() {
                    self.on_confirm_delete_key(key);
                } else if self.search_active {
                    self.on_search_key(key);
                } else {
                    self.on_main_key(key);
                }
            }
        }
    }

    /// Bracketed paste goes to whichever text input has focus.
    pub fn on_paste(&mut self, text: &str) {
        if let Some(editor) = &mut self.editor {
            if editor.confirm_discard {
                return;
            }
            match editor.field {
                EditorField::Title => editor.draft.title.push_str(text),
                EditorField::Content => editor.draft.content.push_str(text),
            }
        } else if self.search_active {
            let mut search = self.store.search_text().to_string();
            search.push_str(text);
            self.store.set_search_text(search);
            self.clamp_selection();
        }
    }

    /// The entry the selection currently rests on, if any.
    pub fn selected_entry(&self) -> Option<&JournalEntry> {
        self.store.visible_entries().get(self.selected).copied()
    }

    fn selected_id(&self) -> Option<EntryId> {
        self.selected_entry().map(|e| e.id)
    }

    fn on_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                let len = self.store.visible_entries().len();
                if self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char('n') => {
                self.editor = Some(EditorState::open(EntryDraft::new_entry()));
            }
            KeyCode::Enter => {
                if let Some(entry) = self.selected_id().and_then(|id| self.store.get(id)) {
                    self.editor = Some(EditorState::open(EntryDraft::edit(entry)));
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    self.store.toggle_bookmark(id);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.pending_delete = self.selected_id();
            }
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Char('1') => self.set_filter(FilterMode::All),
            KeyCode::Char('2') => self.set_filter(FilterMode::Bookmarked),
            KeyCode::Char('3') => self.set_filter(FilterMode::Newest),
            KeyCode::Char('f') => self.set_filter(self.store.filter_mode().next()),
            KeyCode::Esc => {
                self.store.set_search_text("");
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.store.set_search_text("");
                self.search_active = false;
                self.clamp_selection();
            }
            KeyCode::Enter => self.search_active = false,
            KeyCode::Backspace => {
                let mut search = self.store.search_text().to_string();
                search.pop();
                self.store.set_search_text(search);
                self.clamp_selection();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut search = self.store.search_text().to_string();
                search.push(c);
                self.store.set_search_text(search);
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn on_editor_key(&mut self, key: KeyEvent) {
        if self.editor.as_ref().is_some_and(|e| e.confirm_discard) {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.editor = None,
                KeyCode::Char('n') | KeyCode::Esc => {
                    if let Some(editor) = &mut self.editor {
                        editor.confirm_discard = false;
                    }
                }
                _ => {}
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.save_editor();
            }
            return;
        }

        let mut close = false;
        if let Some(editor) = &mut self.editor {
            match key.code {
                KeyCode::Esc => {
                    if editor.draft.is_dirty() {
                        editor.confirm_discard = true;
                    } else {
                        close = true;
                    }
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    editor.field = match editor.field {
                        EditorField::Title => EditorField::Content,
                        EditorField::Content => EditorField::Title,
                    };
                }
                KeyCode::Enter => match editor.field {
                    EditorField::Title => editor.field = EditorField::Content,
                    EditorField::Content => editor.draft.content.push('\n'),
                },
                KeyCode::Backspace => {
                    match editor.field {
                        EditorField::Title => editor.draft.title.pop(),
                        EditorField::Content => editor.draft.content.pop(),
                    };
                }
                KeyCode::Char(c) => match editor.field {
                    EditorField::Title => editor.draft.title.push(c),
                    EditorField::Content => editor.draft.content.push(c),
                },
                _ => {}
            }
        }
        if close {
            self.editor = None;
        }
    }

    fn on_confirm_delete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(id) = self.pending_delete.take() {
                    self.store.delete(id);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => self.pending_delete = None,
            _ => {}
        }
    }

    /// Save is a no-op while the draft is blank, mirroring the disabled
    /// save button; the sheet stays open.
    fn save_editor(&mut self) {
        let Some(editor) = &self.editor else { return };
        if editor.draft.is_blank() {
            return;
        }

        let saved = editor.draft.save(&mut self.store);
        self.editor = None;
        if let Some(id) = saved {
            self.select_visible(id);
        }
        self.clamp_selection();
    }

    fn set_filter(&mut self, mode: FilterMode) {
        self.store.set_filter(mode);
        self.clamp_selection();
    }

    /// Move the selection to the entry's visible row, when it has one.
    fn select_visible(&mut self, id: EntryId) {
        if let Some(pos) = self.store.visible_entries().iter().position(|e| e.id == id) {
            self.selected = pos;
        }
    }

    /// Keep the selection inside the visible list after it shrinks.
    fn clamp_selection(&mut self) {
        let len = self.store.visible_entries().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
