use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::Record;

/// Build a record from raw input and store it, replacing any contact with the same name.
///
/// Invalid birthdays and phones do not abort the command; they are dropped and
/// reported as warnings.
pub fn run<S: AsRef<str>>(
    book: &mut AddressBook,
    name: &str,
    birthday: Option<&str>,
    phones: &[S],
) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(BookError::Api("Name cannot be empty".into()));
    }

    let mut result = CmdResult::default();
    let mut record = Record::new(name, book.date_format());

    if let Some(raw) = birthday {
        if let Err(err) = record.set_birthday(raw) {
            result.add_message(err.into());
        }
    }
    for raw in phones {
        if let Err(err) = record.add_phone(raw.as_ref()) {
            result.add_message(err.into());
        }
    }

    if let Some(previous) = book.add_record(record.clone()) {
        result.add_message(CmdMessage::info(format!("Replaced: {}", previous)));
    }
    result.add_message(CmdMessage::success(format!("Contact saved: {}", record)));
    result.affected_records.push(record);
    Ok(result)
}
