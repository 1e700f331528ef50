use super::{ContactStore, ContactsFile};
use crate::error::{BookError, Result};
use directories::BaseDirs;
use std::fs;
use std::path::PathBuf;

pub const CONTACTS_FILE: &str = "contacts.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<home>/contacts.json`
    pub fn in_home_dir() -> Result<Self> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| BookError::Store("Could not determine home directory".to_string()))?;
        Ok(Self::new(dirs.home_dir().join(CONTACTS_FILE)))
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }
}

impl ContactStore for FileStore {
    fn load(&self) -> Result<Option<ContactsFile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(BookError::Io)?;
        let file: ContactsFile =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        Ok(Some(file))
    }

    fn save(&mut self, file: &ContactsFile) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(file).map_err(BookError::Serialization)?;
        fs::write(&self.path, content).map_err(BookError::Io)?;
        Ok(())
    }
}
