use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.delete(name)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact deleted: {}", name)));
    Ok(result.with_affected_records(vec![record]))
}
