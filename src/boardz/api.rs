//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the widgets.
//! It is the single entry point for every boardz operation, whatever the UI.
//!
//! The facade:
//! - **Owns** the loaded [`NoteStore`] and the active [`BoardzConfig`]
//! - **Dispatches** to the matching command function
//! - **Builds** HTTP clients from config for the remote widgets
//! - **Returns structured types** (`CmdResult`, `Quiz`), never strings for display
//!
//! ## Generic Over SlotBackend
//!
//! `BoardzApi<B: SlotBackend>` is generic over the storage backend:
//! - Production: `BoardzApi<FsSlot>`
//! - Testing: `BoardzApi<MemSlot>`

use crate::clients::github::GithubClient;
use crate::clients::trivia::TriviaClient;
use crate::commands::{self, board, notes};
use crate::config::BoardzConfig;
use crate::counter;
use crate::error::{BoardzError, Result};
use crate::model::{Note, NoteId};
use crate::quiz::Quiz;
use crate::store::note_store::NoteStore;
use crate::store::SlotBackend;
use std::path::PathBuf;

pub struct BoardzApi<B: SlotBackend> {
    store: NoteStore<B>,
    config: BoardzConfig,
    config_dir: PathBuf,
}

impl<B: SlotBackend> BoardzApi<B> {
    /// Builds the facade and loads the note board from `backend`.
    pub fn new(backend: B, config: BoardzConfig, config_dir: PathBuf) -> Self {
        let mut store = NoteStore::new(backend, config.storage_key.clone());
        store.load();
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn list_notes(&self) -> CmdResult {
        notes::list(&self.store)
    }

    pub fn add_note(&mut self, title: &str, content: &str) -> CmdResult {
        notes::add(&mut self.store, title, content)
    }

    pub fn edit_note(
        &mut self,
        id: NoteId,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<CmdResult> {
        notes::edit(&mut self.store, id, title, content)
    }

    pub fn remove_note(&mut self, id: NoteId) -> CmdResult {
        notes::remove(&mut self.store, id)
    }

    pub fn get_note(&self, id: NoteId) -> Result<&Note> {
        self.store.get(id).ok_or(BoardzError::NoteNotFound(id))
    }

    /// Feeds one line of an interactive board session.
    pub fn board_line(&mut self, line: &str) -> CmdResult {
        board::run_line(&mut self.store, line)
    }

    pub async fn profile(&self, username: &str) -> Result<CmdResult> {
        let client = GithubClient::new(&self.config.github_api, self.config.timeout_secs)?;
        Ok(commands::profile::run(&client, username).await)
    }

    pub async fn load_quiz(&self, amount: Option<u32>) -> Result<Quiz> {
        let client = TriviaClient::new(&self.config.trivia_api, self.config.timeout_secs)?;
        let amount = amount.unwrap_or(self.config.quiz_amount);
        Ok(Quiz::fetch(&client, amount).await)
    }

    pub fn count(&self, text: &str) -> CmdResult {
        CmdResult::default().with_stats(counter::count(text))
    }

    pub fn config(&mut self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, DraftState, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemSlot;
    use tempfile::TempDir;

    fn api(dir: &TempDir) -> BoardzApi<MemSlot> {
        BoardzApi::new(
            MemSlot::new(),
            BoardzConfig::default(),
            dir.path().to_path_buf(),
        )
    }

    #[test]
    fn starts_with_default_board() {
        let dir = TempDir::new().unwrap();
        assert_eq!(api(&dir).list_notes().listed_notes.len(), 3);
    }

    #[test]
    fn dispatches_note_operations() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        let added = api.add_note("Shopping", "Buy rice");
        let id = added.affected_notes[0].id;
        api.edit_note(id, Some("Market".into()), None).unwrap();
        assert_eq!(api.get_note(id).unwrap().title, "Market");

        api.remove_note(id);
        assert!(api.get_note(id).is_err());
        assert_eq!(api.store().backend().write_count(), 3);
    }

    #[test]
    fn uses_configured_slot_key() {
        let dir = TempDir::new().unwrap();
        let config = BoardzConfig {
            storage_key: "board".into(),
            ..BoardzConfig::default()
        };
        let mut api = BoardzApi::new(MemSlot::new(), config, dir.path().to_path_buf());
        api.add_note("a", "b");
        assert!(api.store().backend().peek("board").is_some());
        assert!(api.store().backend().peek("notes").is_none());
    }

    #[test]
    fn count_returns_stats() {
        let dir = TempDir::new().unwrap();
        let stats = api(&dir).count("  hello   world  ").stats.unwrap();
        assert_eq!((stats.words, stats.chars), (2, 17));
    }

    #[test]
    fn config_updates_live_settings() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.config(ConfigAction::Set("quiz-amount".into(), "3".into()))
            .unwrap();
        assert_eq!(api.config.quiz_amount, 3);
    }
}
