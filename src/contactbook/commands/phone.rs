//! Phone operations on an existing contact.
//!
//! An unknown contact is an error. Problems with the phone itself (invalid,
//! duplicate, not on the record) are warnings and leave the record untouched.

use crate::book::AddressBook;
use crate::commands::helpers::{record_by_name, record_by_name_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    let record = record_by_name_mut(book, name)?;
    let mut result = CmdResult::default();
    match record.add_phone(raw) {
        Ok(phone) => {
            result.add_message(CmdMessage::success(format!(
                "Phone {} added to {}",
                phone, name
            )));
            result.affected_records.push(record.clone());
        }
        Err(err) => result.add_message(err.into()),
    }
    Ok(result)
}

pub fn remove(book: &mut AddressBook, name: &str, value: &str) -> Result<CmdResult> {
    let record = record_by_name_mut(book, name)?;
    let mut result = CmdResult::default();
    match record.remove_phone(value) {
        Ok(phone) => {
            result.add_message(CmdMessage::success(format!(
                "Phone {} removed from {}",
                phone, name
            )));
            result.affected_records.push(record.clone());
        }
        Err(err) => result.add_message(err.into()),
    }
    Ok(result)
}

pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = record_by_name_mut(book, name)?;
    let mut result = CmdResult::default();
    match record.edit_phone(old, new) {
        Ok(phone) => {
            result.add_message(CmdMessage::success(format!(
                "Phone {} changed to {}",
                old, phone
            )));
            result.affected_records.push(record.clone());
        }
        Err(err) => result.add_message(err.into()),
    }
    Ok(result)
}

pub fn find(book: &AddressBook, name: &str, value: &str) -> Result<CmdResult> {
    let record = record_by_name(book, name)?;
    let mut result = CmdResult::default();
    match record.find_phone(value) {
        Ok(phone) => result.phone = Some(phone.clone()),
        Err(err) => result.add_message(err.into()),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add as add_contact, MessageLevel};
    use crate::error::BookError;

    fn book_with_john() -> AddressBook {
        let mut book = AddressBook::default();
        add_contact::run(&mut book, "John", None, &["1234567890", "5555555555"]).unwrap();
        book
    }

    fn phones(book: &AddressBook) -> Vec<String> {
        book.find("John")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn add_and_remove() {
        let mut book = book_with_john();
        add(&mut book, "John", "777 777 7777").unwrap();
        assert_eq!(phones(&book), vec!["1234567890", "5555555555", "7777777777"]);

        remove(&mut book, "John", "7777777777").unwrap();
        assert_eq!(phones(&book), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn remove_unknown_phone_warns() {
        let mut book = book_with_john();
        let result = remove(&mut book, "John", "0000000000").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Phone number 0000000000 not found.");
        assert!(result.affected_records.is_empty());
    }

    #[test]
    fn edit_with_invalid_value_keeps_phone() {
        let mut book = book_with_john();
        let result = edit(&mut book, "John", "1234567890", "abc").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(phones(&book), vec!["1234567890", "5555555555"]);

        edit(&mut book, "John", "1234567890", "1112223333").unwrap();
        assert_eq!(phones(&book), vec!["1112223333", "5555555555"]);
    }

    #[test]
    fn find_returns_phone_or_warns() {
        let book = book_with_john();
        let found = find(&book, "John", "5555555555").unwrap();
        assert_eq!(found.phone.unwrap().as_str(), "5555555555");

        let missing = find(&book, "John", "5555").unwrap();
        assert!(missing.phone.is_none());
        assert_eq!(missing.messages.len(), 1);
    }

    #[test]
    fn unknown_contact_is_an_error() {
        let mut book = book_with_john();
        let err = add(&mut book, "Jane", "1234567890").unwrap_err();
        assert!(matches!(err, BookError::ContactNotFound(name) if name == "Jane"));
    }
}
