use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    let pages = book.iterator(page_size).collect();
    Ok(CmdResult::default().with_pages(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn splits_into_pages() {
        let mut book = AddressBook::default();
        for i in 0..7 {
            add::run::<&str>(&mut book, &format!("Contact {}", i), None, &[]).unwrap();
        }

        let result = run(&book, 5).unwrap();
        assert_eq!(result.pages.len(), 2);
        assert_eq!(result.pages[1].lines().count(), 2);
    }

    #[test]
    fn empty_book_has_no_pages() {
        let result = run(&AddressBook::default(), 5).unwrap();
        assert!(result.pages.is_empty());
    }
}
