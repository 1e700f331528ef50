//! # API Facade
//!
//! [`ContactsApi`] is the single entry point for every operation. It owns the
//! in-memory [`AddressBook`] and the [`ContactStore`] it was loaded from, and
//! writes the whole book back after every mutating command.
//!
//! Like the command layer underneath, it never prints. Everything comes back as
//! a [`CmdResult`] for the UI to render.
//!
//! Generic over `ContactStore`:
//! - Production: `ContactsApi<FileStore>`
//! - Testing: `ContactsApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::config::BookConfig;
use crate::error::Result;
use crate::store::ContactStore;
use std::path::PathBuf;

pub struct ContactsApi<S: ContactStore> {
    store: S,
    book: AddressBook,
    config: BookConfig,
    config_dir: PathBuf,
}

impl<S: ContactStore> ContactsApi<S> {
    /// Create the facade with an empty book. Call [`ContactsApi::load`] to read the store.
    pub fn new(store: S, config: BookConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            book: AddressBook::new(config.date_format),
            config,
            config_dir,
        }
    }

    /// Read the store into the book. Entries that fail validation come back as warnings.
    pub fn load(&mut self) -> Result<commands::CmdResult> {
        let diagnostics = self.book.load_from_file(&self.store)?;
        let mut result = commands::CmdResult::default();
        result.add_warnings(diagnostics);
        Ok(result)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    pub fn add_contact<P: AsRef<str>>(
        &mut self,
        name: &str,
        birthday: Option<&str>,
        phones: &[P],
    ) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.book, name, birthday, phones)?;
        self.persist()?;
        Ok(result)
    }

    pub fn show_contact(&self, name: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.book, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.book, name)?;
        self.persist()?;
        Ok(result)
    }

    /// Pages of contacts; `page_size` falls back to the configured one.
    pub fn list_contacts(&self, page_size: Option<usize>) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, page_size.unwrap_or(self.config.page_size))
    }

    pub fn search_contacts(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, term)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        let result = commands::phone::add(&mut self.book, name, phone)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        let result = commands::phone::remove(&mut self.book, name, phone)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    pub fn edit_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        let result = commands::phone::edit(&mut self.book, name, old, new)?;
        self.persist_if_changed(&result)?;
        Ok(result)
    }

    pub fn find_phone(&self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phone::find(&self.book, name, phone)
    }

    pub fn birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    pub fn set_birthday(&mut self, name: &str, raw: &str) -> Result<commands::CmdResult> {
        let result = commands::birthday::set(&mut self.book, name, raw)?;
        self.persist()?;
        Ok(result)
    }

    /// Show or change configuration. Changing the date format rewrites the
    /// stored birthdays so the file stays readable under the new format.
    ///
    /// The contacts are rewritten before config.json is saved. If either write
    /// fails, the book and its stored document are put back on the old format.
    pub fn configure(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let previous = self.book.date_format();
        let mut rewrote = false;
        if let ConfigAction::Set(key, value) = &action {
            let mut next = self.config.clone();
            if next.set(key, value).is_ok() && next.date_format != previous {
                self.book.set_date_format(next.date_format);
                if let Err(err) = self.persist() {
                    self.book.set_date_format(previous);
                    return Err(err);
                }
                rewrote = true;
            }
        }

        let result = match commands::config::run(&self.config_dir, action) {
            Ok(result) => result,
            Err(err) => {
                if rewrote {
                    self.book.set_date_format(previous);
                    self.persist()?;
                }
                return Err(err);
            }
        };
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    fn persist(&mut self) -> Result<()> {
        self.book.save_to_file(&mut self.store)
    }

    fn persist_if_changed(&mut self, result: &commands::CmdResult) -> Result<()> {
        if result.affected_records.is_empty() {
            return Ok(());
        }
        self.persist()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
