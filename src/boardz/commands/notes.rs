//! One-shot note operations, as used by the `list`/`add`/`edit`/`remove`
//! subcommands.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BoardzError, Result};
use crate::model::NoteId;
use crate::store::note_store::NoteStore;
use crate::store::SlotBackend;

pub fn list<B: SlotBackend>(store: &NoteStore<B>) -> CmdResult {
    CmdResult::default().with_listed_notes(store.notes().to_vec())
}

pub fn add<B: SlotBackend>(store: &mut NoteStore<B>, title: &str, content: &str) -> CmdResult {
    match store.add(title, content) {
        Some(id) => {
            let note = store.get(id).cloned().into_iter().collect();
            CmdResult::default()
                .with_affected_notes(note)
                .with_message(CmdMessage::success(format!("Note added ({}): {}", id, title)))
        }
        None => CmdResult::default().with_message(CmdMessage::info(
            "Nothing added: title and content are both required",
        )),
    }
}

/// Opens the note for editing, overlays the given fields on its text and
/// commits. Fields left as None keep their current value.
pub fn edit<B: SlotBackend>(
    store: &mut NoteStore<B>,
    id: NoteId,
    title: Option<String>,
    content: Option<String>,
) -> Result<CmdResult> {
    if !store.begin_edit(id) {
        return Err(BoardzError::NoteNotFound(id));
    }
    if let Some(title) = title {
        store.set_draft_title(title);
    }
    if let Some(content) = content {
        store.set_draft_content(content);
    }

    if !store.commit_edit() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "Nothing updated: title and content are both required",
        )));
    }

    let note = store.get(id).cloned().into_iter().collect::<Vec<_>>();
    let title = note.first().map(|n| n.title.clone()).unwrap_or_default();
    Ok(CmdResult::default()
        .with_affected_notes(note)
        .with_message(CmdMessage::success(format!(
            "Note updated ({}): {}",
            id, title
        ))))
}

pub fn remove<B: SlotBackend>(store: &mut NoteStore<B>, id: NoteId) -> CmdResult {
    let removed = store.get(id).cloned();
    if store.remove(id) {
        let title = removed.as_ref().map(|n| n.title.clone()).unwrap_or_default();
        CmdResult::default()
            .with_affected_notes(removed.into_iter().collect())
            .with_message(CmdMessage::success(format!(
                "Note removed ({}): {}",
                id, title
            )))
    } else {
        CmdResult::default().with_message(CmdMessage::warning(format!("No note with id {}", id)))
    }
}
