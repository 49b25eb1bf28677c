//! # Storage Layer
//!
//! Notes are persisted through a [`SlotBackend`]: a named key-value slot holding
//! one serialized blob. The [`note_store::NoteStore`] keeps the authoritative
//! in-memory collection and rewrites the whole slot after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FsSlot`]: production storage, one file per key
//!   - `notes.json` holds the note snapshot (JSON array)
//!   - Writes go through a temp file and a rename
//!
//! - [`memory::MemSlot`]: in-memory storage for testing
//!   - No persistence
//!   - Can simulate read and write failures
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/boardz/
//! ├── notes.json      # [{"id": 1, "title": "...", "content": "..."}, ...]
//! └── config.json     # BoardzConfig
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod note_store;

/// Raw key-value I/O for durable slots.
///
/// The backend knows nothing about notes; it stores and returns opaque strings.
pub trait SlotBackend {
    /// Read the value under `key`.
    /// Returns Ok(None) if nothing has been written yet.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}
