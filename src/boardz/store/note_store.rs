//! The note board's authoritative state.
//!
//! [`NoteStore`] owns the ordered note collection, the editing cursor and the
//! shared draft. Every successful mutation writes one full JSON snapshot of the
//! collection to the backend slot. Slot failures are logged and swallowed: the
//! in-memory collection stays the source of truth for the session.

use super::SlotBackend;
use crate::model::{default_notes, Draft, Mode, Note, NoteId};
use chrono::Utc;

pub const DEFAULT_SLOT_KEY: &str = "notes";

pub struct NoteStore<B: SlotBackend> {
    backend: B,
    key: String,
    notes: Vec<Note>,
    editing: Option<NoteId>,
    draft: Draft,
}

impl<B: SlotBackend> NoteStore<B> {
    /// Creates an empty, unloaded store. Call [`NoteStore::load`] before use.
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            notes: Vec::new(),
            editing: None,
            draft: Draft::default(),
        }
    }

    /// Reads the slot into memory, seeding the default notes when the slot is
    /// absent or unreadable. Resets the cursor and the draft.
    pub fn load(&mut self) {
        self.editing = None;
        self.draft.clear();
        self.notes = match self.backend.read_slot(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    log::error!("Discarding unreadable note slot '{}': {}", self.key, e);
                    default_notes()
                }
            },
            Ok(None) => {
                log::debug!("Note slot '{}' is empty, seeding defaults", self.key);
                default_notes()
            }
            Err(e) => {
                log::error!("Failed to read note slot '{}': {}", self.key, e);
                default_notes()
            }
        };
    }

    /// Appends a note. Returns the new id, or None when either field is blank.
    pub fn add(&mut self, title: &str, content: &str) -> Option<NoteId> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return None;
        }
        let Some(id) = self.next_id() else {
            log::error!("No note id left above the largest id in use");
            return None;
        };
        self.notes.push(Note::new(id, title, content));
        self.persist();
        Some(id)
    }

    /// Loads the note into the draft and points the cursor at it.
    pub fn begin_edit(&mut self, id: NoteId) -> bool {
        let Some(note) = self.get(id) else {
            return false;
        };
        self.draft = Draft::new(note.title.clone(), note.content.clone());
        self.editing = Some(id);
        true
    }

    /// Writes the draft into the note under the cursor.
    ///
    /// The cursor is left in place, so further commits keep targeting the same
    /// note until [`NoteStore::cancel_edit`] is called.
    pub fn commit_edit(&mut self) -> bool {
        let Some(id) = self.editing else {
            return false;
        };
        if !self.draft.is_complete() {
            return false;
        }
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            log::warn!("Editing cursor points at missing note {}", id);
            return false;
        };
        note.title = self.draft.title.clone();
        note.content = self.draft.content.clone();
        self.persist();
        true
    }

    /// Removes the note if present. The resulting collection is persisted
    /// either way. Returns whether a note was removed.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.persist();
        self.notes.len() != before
    }

    /// The form's single button: adds the draft when creating, commits it when
    /// editing. Returns the id of the note that was written.
    pub fn submit(&mut self) -> Option<NoteId> {
        match self.mode() {
            Mode::Creating => {
                let Draft { title, content } = self.draft.clone();
                let id = self.add(&title, &content)?;
                self.draft.clear();
                Some(id)
            }
            Mode::Editing(id) => self.commit_edit().then_some(id),
        }
    }

    /// Drops the cursor and the draft, returning to creating mode.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> Mode {
        match self.editing {
            Some(id) => Mode::Editing(id),
            None => Mode::Creating,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // Millisecond timestamp, bumped past the largest id in use. None once the
    // largest id is i64::MAX.
    fn next_id(&self) -> Option<NoteId> {
        let now = Utc::now().timestamp_millis();
        match self.notes.iter().map(|n| n.id).max() {
            Some(max) if now <= max => max.checked_add(1),
            _ => Some(now),
        }
    }

    fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.notes) {
            Ok(s) => s,
            Err(e) => {
                log::error!("Failed to serialize notes: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.write_slot(&self.key, &snapshot) {
            log::error!("Failed to write note slot '{}': {}", self.key, e);
        }
    }
}
