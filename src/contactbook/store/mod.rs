//! # Storage Layer
//!
//! The [`ContactStore`] trait hides where the contacts document lives. The address
//! book only ever reads or writes the whole document at once; there is no partial
//! update and no locking, so the last writer wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   (`~/contacts.json` by default)
//! - [`memory::InMemoryStore`]: Keeps the serialized document in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "contacts": [
//!     { "name": "John", "birthday": "26.11.2002", "phones": ["1234567890"] }
//!   ]
//! }
//! ```
//!
//! Entries are stored as plain strings. Validation happens when the address book
//! loads them, not here, so a hand-edited file with bad values still loads.

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// The persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsFile {
    pub contacts: Vec<ContactEntry>,
}

/// One contact as written on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub name: String,
    /// Formatted birthday, empty when absent
    #[serde(default)]
    pub birthday: String,
    #[serde(default)]
    pub phones: Vec<String>,
}

/// Abstract interface for the contacts document.
pub trait ContactStore {
    /// Read the document. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<ContactsFile>>;

    /// Replace the document in full.
    fn save(&mut self, file: &ContactsFile) -> Result<()>;
}
