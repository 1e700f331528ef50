use super::{ContactStore, ContactsFile};
use crate::error::{BookError, Result};

/// Holds the serialized document in memory, so round trips still go through JSON.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    content: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw JSON document, as if it had been written by hand.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Option<ContactsFile>> {
        self.content
            .as_deref()
            .map(|c| serde_json::from_str(c).map_err(BookError::Serialization))
            .transpose()
    }

    fn save(&mut self, file: &ContactsFile) -> Result<()> {
        self.content = Some(serde_json::to_string(file).map_err(BookError::Serialization)?);
        Ok(())
    }
}
