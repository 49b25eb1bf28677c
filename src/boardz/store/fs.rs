use super::SlotBackend;
use crate::error::{BoardzError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsSlot {
    root: PathBuf,
}

impl FsSlot {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BoardzError::Io)?;
        }
        Ok(())
    }
}

impl SlotBackend for FsSlot {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(BoardzError::Io)?;
        Ok(Some(value))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(BoardzError::Io)?;
        fs::rename(&tmp_path, self.slot_path(key)).map_err(BoardzError::Io)?;

        Ok(())
    }
}
