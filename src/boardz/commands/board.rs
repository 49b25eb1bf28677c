//! Line-oriented note board session.
//!
//! The board keeps the store's editing cursor and draft alive between lines,
//! so a session works like a note form: type a title and content,
//! `submit`, pick a note with `edit`, change the draft, `submit` again.

use crate::commands::{notes, CmdMessage, CmdResult, DraftState};
use crate::error::{BoardzError, Result};
use crate::model::{Mode, NoteId};
use crate::store::note_store::NoteStore;
use crate::store::SlotBackend;
use std::str::FromStr;

pub const BOARD_HELP: &str = "\
Commands:
  title <text>      set the draft title
  content <text>    set the draft content
  submit            add the draft, or update the note being edited
  edit <id>         load a note into the draft for editing
  cancel            stop editing and clear the draft
  delete <id>       delete a note
  list              show all notes
  draft             show the draft and current mode
  help              show this help
  quit              leave the board";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    Title(String),
    Content(String),
    Submit,
    Edit(NoteId),
    Cancel,
    Delete(NoteId),
    List,
    Draft,
    Help,
    Quit,
}

impl FromStr for BoardCommand {
    type Err = BoardzError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "title" | "t" => BoardCommand::Title(rest.to_string()),
            "content" | "c" => BoardCommand::Content(rest.to_string()),
            "submit" | "save" | "s" => BoardCommand::Submit,
            "edit" | "e" => BoardCommand::Edit(parse_id(rest)?),
            "cancel" => BoardCommand::Cancel,
            "delete" | "rm" | "d" => BoardCommand::Delete(parse_id(rest)?),
            "list" | "ls" | "l" => BoardCommand::List,
            "draft" => BoardCommand::Draft,
            "help" | "?" => BoardCommand::Help,
            "quit" | "exit" | "q" => BoardCommand::Quit,
            other => {
                return Err(BoardzError::Api(format!(
                    "Unknown board command: {} (try 'help')",
                    other
                )))
            }
        };
        Ok(cmd)
    }
}

fn parse_id(s: &str) -> Result<NoteId> {
    s.parse()
        .map_err(|_| BoardzError::Api(format!("Invalid note id: '{}'", s)))
}

fn draft_state<B: SlotBackend>(store: &NoteStore<B>) -> DraftState {
    DraftState {
        mode: store.mode(),
        draft: store.draft().clone(),
    }
}

pub fn apply<B: SlotBackend>(store: &mut NoteStore<B>, cmd: BoardCommand) -> CmdResult {
    match cmd {
        BoardCommand::Title(text) => {
            store.set_draft_title(text);
            CmdResult::default().with_draft(draft_state(store))
        }
        BoardCommand::Content(text) => {
            store.set_draft_content(text);
            CmdResult::default().with_draft(draft_state(store))
        }
        BoardCommand::Submit => {
            let mode = store.mode();
            match (store.submit(), mode) {
                (Some(id), Mode::Creating) => CmdResult::default()
                    .with_affected_notes(store.get(id).cloned().into_iter().collect())
                    .with_message(CmdMessage::success(format!("Note added ({})", id))),
                (Some(id), Mode::Editing(_)) => CmdResult::default()
                    .with_affected_notes(store.get(id).cloned().into_iter().collect())
                    .with_message(CmdMessage::success(format!("Note updated ({})", id))),
                (None, Mode::Editing(id)) if store.get(id).is_none() => CmdResult::default()
                    .with_message(CmdMessage::warning(format!(
                        "No note with id {} (use 'cancel')",
                        id
                    ))),
                (None, _) => CmdResult::default().with_message(CmdMessage::info(
                    "Draft needs both a title and content",
                )),
            }
        }
        BoardCommand::Edit(id) => {
            if store.begin_edit(id) {
                CmdResult::default()
                    .with_draft(draft_state(store))
                    .with_message(CmdMessage::info(format!("Editing note {}", id)))
            } else {
                CmdResult::default()
                    .with_message(CmdMessage::warning(format!("No note with id {}", id)))
            }
        }
        BoardCommand::Cancel => {
            store.cancel_edit();
            CmdResult::default()
                .with_draft(draft_state(store))
                .with_message(CmdMessage::info("Back to creating a new note"))
        }
        BoardCommand::Delete(id) => notes::remove(store, id),
        BoardCommand::List => notes::list(store),
        BoardCommand::Draft => CmdResult::default().with_draft(draft_state(store)),
        BoardCommand::Help => CmdResult::default().with_message(CmdMessage::info(BOARD_HELP)),
        BoardCommand::Quit => CmdResult {
            quit: true,
            ..CmdResult::default()
        },
    }
}

/// Parses and applies one input line. Blank lines do nothing; bad lines come
/// back as an error message rather than an `Err`.
pub fn run_line<B: SlotBackend>(store: &mut NoteStore<B>, line: &str) -> CmdResult {
    if line.trim().is_empty() {
        return CmdResult::default();
    }
    match line.parse::<BoardCommand>() {
        Ok(cmd) => apply(store, cmd),
        Err(e) => CmdResult::default().with_message(CmdMessage::error(e.to_string())),
    }
}
