use super::SlotBackend;
use crate::error::{BoardzError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory slot storage for testing.
///
/// Uses `RefCell` since the note store is single-threaded, so `SlotBackend`
/// can take `&self` everywhere.
#[derive(Default)]
pub struct MemSlot {
    slots: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl MemSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot without counting it as a write.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful `write_slot` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw stored value, bypassing error simulation.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl SlotBackend for MemSlot {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(BoardzError::Store("Simulated read error".to_string()));
        }
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(BoardzError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Note;
    use crate::store::note_store::{NoteStore, DEFAULT_SLOT_KEY};

    pub struct StoreFixture {
        pub store: NoteStore<MemSlot>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A loaded store on an empty slot, i.e. holding the default notes.
        pub fn new() -> Self {
            let mut store = NoteStore::new(MemSlot::new(), DEFAULT_SLOT_KEY);
            store.load();
            Self { store }
        }

        /// A loaded store whose slot already holds `notes`.
        pub fn with_saved(notes: &[Note]) -> Self {
            let json = serde_json::to_string(notes).unwrap();
            let backend = MemSlot::new().with_value(DEFAULT_SLOT_KEY, &json);
            let mut store = NoteStore::new(backend, DEFAULT_SLOT_KEY);
            store.load();
            Self { store }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(
                    &format!("Test Note {}", i + 1),
                    &format!("Content for note {}", i + 1),
                );
            }
            self
        }
    }
}
