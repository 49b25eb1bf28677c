use crate::config::BoardzConfig;
use crate::counter::TextStats;
use crate::model::{Draft, Mode, Note};
use crate::profile::ProfileView;

pub mod board;
pub mod config;
pub mod notes;
pub mod profile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Snapshot of the board's form state, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    pub mode: Mode,
    pub draft: Draft,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub draft: Option<DraftState>,
    pub profile: Option<ProfileView>,
    pub stats: Option<TextStats>,
    pub config: Option<BoardzConfig>,
    pub messages: Vec<CmdMessage>,
    /// Set when an interactive session should end.
    pub quit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_draft(mut self, draft: DraftState) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_profile(mut self, profile: ProfileView) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_stats(mut self, stats: TextStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: BoardzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
