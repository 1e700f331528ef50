use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Look up a single contact. A miss is not an error, just an empty listing.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find(name) {
        Some(record) => {
            result.days_to_birthday = record.days_to_birthday();
            result.listed_records.push(record.clone());
        }
        None => result.add_message(CmdMessage::info(format!("No contact named {}.", name))),
    }
    Ok(result)
}
