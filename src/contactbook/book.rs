//! # Address Book
//!
//! An ordered collection of [`Record`]s keyed by contact name. Lookups are a
//! linear scan; insertion order is kept and is the order used for listing,
//! searching and saving.
//!
//! The book does not know where it is persisted. [`AddressBook::load_from_file`]
//! and [`AddressBook::save_to_file`] take any [`ContactStore`].

use crate::error::{BookError, RecordError, Result};
use crate::fields::DateFormat;
use crate::model::Record;
use crate::store::{ContactEntry, ContactStore, ContactsFile};

#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    date_format: DateFormat,
}

impl AddressBook {
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            records: Vec::new(),
            date_format,
        }
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    /// Switch the date format for every record, e.g. before re-saving.
    pub fn set_date_format(&mut self, format: DateFormat) {
        self.date_format = format;
        for record in &mut self.records {
            record.set_date_format(format);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Insert `record` under its name. An existing record with the same name is
    /// replaced in place and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(idx) => Some(std::mem::replace(&mut self.records[idx], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let idx = self
            .position(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(idx))
    }

    /// Pages of up to `batch_size` rendered records, one record per line.
    ///
    /// Every call starts a fresh traversal. An empty book yields nothing; a
    /// `batch_size` of zero is treated as one.
    pub fn iterator(&self, batch_size: usize) -> impl Iterator<Item = String> + '_ {
        self.records.chunks(batch_size.max(1)).map(render)
    }

    /// Rendered records whose name or any phone contains `needle`, one per
    /// line. Matching is case-sensitive. Empty when nothing matches.
    pub fn find_by_string(&self, needle: &str) -> String {
        self.records
            .iter()
            .filter(|r| r.matches(needle))
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Merge the stored contacts into this book.
    ///
    /// A missing document is not an error. Entries are re-validated: bad
    /// birthdays become absent and bad phones are dropped. The returned
    /// diagnostics say what was discarded. Duplicate names collapse to the
    /// last entry.
    pub fn load_from_file<S: ContactStore>(&mut self, store: &S) -> Result<Vec<RecordError>> {
        let mut diagnostics = Vec::new();
        let file = match store.load()? {
            Some(file) => file,
            None => return Ok(diagnostics),
        };

        for entry in file.contacts {
            let mut record = Record::new(entry.name, self.date_format);
            if let Err(err) = record.set_birthday(&entry.birthday) {
                diagnostics.push(err);
            }
            for phone in &entry.phones {
                if let Err(err) = record.add_phone(phone) {
                    diagnostics.push(err);
                }
            }
            self.add_record(record);
        }

        Ok(diagnostics)
    }

    /// Overwrite the stored document with every record in this book.
    pub fn save_to_file<S: ContactStore>(&self, store: &mut S) -> Result<()> {
        store.save(&self.to_contacts_file())
    }

    pub fn to_contacts_file(&self) -> ContactsFile {
        let contacts = self
            .records
            .iter()
            .map(|r| ContactEntry {
                name: r.name().to_string(),
                birthday: r.birthday().to_string(),
                phones: r.phones().iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        ContactsFile { contacts }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

fn render(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
