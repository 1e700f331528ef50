use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook, term: &str) -> Result<CmdResult> {
    let text = book.find_by_string(term);
    let pages = if text.is_empty() { vec![] } else { vec![text] };
    Ok(CmdResult::default().with_pages(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn finds_by_name_or_phone() {
        let mut book = AddressBook::default();
        add::run::<&str>(&mut book, "Anna", None, &[]).unwrap();
        add::run(&mut book, "Bob", None, &["5551234567"]).unwrap();

        let result = run(&book, "nn").unwrap();
        assert_eq!(result.pages, vec!["Contact name: Anna".to_string()]);

        let result = run(&book, "555").unwrap();
        assert_eq!(
            result.pages,
            vec!["Contact name: Bob, phone: 5551234567".to_string()]
        );
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let mut book = AddressBook::default();
        add::run::<&str>(&mut book, "John", None, &[]).unwrap();

        assert!(run(&book, "JO").unwrap().pages.is_empty());
        assert_eq!(run(&book, "Jo").unwrap().pages.len(), 1);
    }

    #[test]
    fn no_matches_yields_no_pages() {
        let mut book = AddressBook::default();
        add::run::<&str>(&mut book, "Anna", None, &[]).unwrap();
        let result = run(&book, "zzz").unwrap();
        assert!(result.pages.is_empty());
    }
}
