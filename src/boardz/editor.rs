use crate::error::{BoardzError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

/// A note's text as laid out in an editor buffer.
/// Format: title\n\ncontent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub content: String,
}

impl EditorContent {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn to_buffer(&self) -> String {
        format!("{}\n\n{}", self.title, self.content)
    }

    /// First non-blank line is the title; everything after it, trimmed, is the
    /// content.
    pub fn from_buffer(buffer: &str) -> Self {
        let trimmed = buffer.trim_start();
        let (title, rest) = trimmed.split_once('\n').unwrap_or((trimmed, ""));
        Self {
            title: title.trim().to_string(),
            content: rest.trim().to_string(),
        }
    }
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(BoardzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry flags, e.g. "code --wait".
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(&editor);
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| BoardzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(BoardzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(BoardzError::Io)
}

/// Round-trips `initial` through the editor via a temp file.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join(format!("boardz-{}.txt", Uuid::new_v4()));
    fs::write(&temp_file, initial.to_buffer()).map_err(BoardzError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_buffer_separates_with_blank_line() {
        let ec = EditorContent::new("My Title", "Some content here.");
        assert_eq!(ec.to_buffer(), "My Title\n\nSome content here.");
    }

    #[test]
    fn from_buffer_normal() {
        let ec = EditorContent::from_buffer("My Title\n\nThis is content.\nMore content.\n");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.content, "This is content.\nMore content.");
    }

    #[test]
    fn from_buffer_title_only() {
        let ec = EditorContent::from_buffer("My Title");
        assert_eq!(ec, EditorContent::new("My Title", ""));
    }

    #[test]
    fn from_buffer_skips_leading_blank_lines() {
        let ec = EditorContent::from_buffer("\n\n  Title\ncontent");
        assert_eq!(ec, EditorContent::new("Title", "content"));
    }

    #[test]
    fn from_buffer_empty() {
        assert_eq!(EditorContent::from_buffer(""), EditorContent::new("", ""));
    }

    #[test]
    fn roundtrip() {
        let original = EditorContent::new("Test Title", "Test content\nwith lines");
        assert_eq!(EditorContent::from_buffer(&original.to_buffer()), original);
    }
}
