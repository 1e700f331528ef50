use crate::book::AddressBook;
use crate::commands::helpers::{record_by_name, record_by_name_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Days until the contact's next birthday.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = record_by_name(book, name)?;
    let mut result = CmdResult::default();
    result.days_to_birthday = record.days_to_birthday();
    if result.days_to_birthday.is_none() {
        result.add_message(CmdMessage::info(format!("{} has no birthday set.", name)));
    }
    Ok(result)
}

/// Set or clear (with an empty string) a contact's birthday.
pub fn set(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    let record = record_by_name_mut(book, name)?;
    let mut result = CmdResult::default();
    match record.set_birthday(raw) {
        Ok(()) if raw.is_empty() => {
            result.add_message(CmdMessage::success(format!("Birthday cleared for {}", name)))
        }
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "Birthday of {} set to {}",
            name,
            record.birthday()
        ))),
        Err(err) => result.add_message(err.into()),
    }
    result.affected_records.push(record.clone());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};

    #[test]
    fn show_reports_missing_birthday() {
        let mut book = AddressBook::default();
        add::run::<&str>(&mut book, "First", None, &[]).unwrap();

        let result = show(&book, "First").unwrap();
        assert_eq!(result.days_to_birthday, None);
        assert_eq!(result.messages[0].content, "First has no birthday set.");
    }

    #[test]
    fn set_then_show() {
        let mut book = AddressBook::default();
        add::run::<&str>(&mut book, "John", None, &[]).unwrap();

        set(&mut book, "John", "26.11.2002").unwrap();
        let result = show(&book, "John").unwrap();
        let days = result.days_to_birthday.unwrap();
        assert!((0..=365).contains(&days));
    }

    #[test]
    fn invalid_birthday_clears_it_and_warns() {
        let mut book = AddressBook::default();
        add::run::<&str>(&mut book, "John", Some("26.11.2002"), &[]).unwrap();

        let result = set(&mut book, "John", "32.01.2000").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(book.find("John").unwrap().birthday().date().is_none());
    }
}
