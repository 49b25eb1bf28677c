use serde::{Deserialize, Serialize};

pub type NoteId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The in-progress title/content pair shared by the create and edit flows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields carry something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Creating,
    Editing(NoteId),
}

/// Notes shown on a fresh board, before anything has been saved.
pub fn default_notes() -> Vec<Note> {
    vec![
        Note::new(1, "Grocery List", "Milk , Eggs , Bread , Appples"),
        Note::new(
            2,
            "Meeting Notes",
            "Discuss new project timeline , assign atsks to team",
        ),
        Note::new(
            3,
            "Idea for App",
            "Develope a note-taking app with a clean and minimalist Design",
        ),
    ]
}
