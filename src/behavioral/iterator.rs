//! Iterator: walk a collection without knowing how it is stored.

use std::iter::FusedIterator;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// A fresh cursor at the first book. Restarting means asking for a new
    /// one.
    pub fn iter(&self) -> LibraryIter<'_> {
        LibraryIter {
            library: self,
            position: 0,
        }
    }
}

impl FromIterator<Book> for Library {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

pub struct LibraryIter<'a> {
    library: &'a Library,
    position: usize,
}

impl<'a> Iterator for LibraryIter<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        let book = self.library.books.get(self.position)?;
        self.position += 1;
        Some(book)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.library.books.len().saturating_sub(self.position);
        (left, Some(left))
    }
}

impl ExactSizeIterator for LibraryIter<'_> {}
impl FusedIterator for LibraryIter<'_> {}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = LibraryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Reader;

impl Reader {
    pub fn see_books(&self, library: &Library, out: &mut Transcript) {
        for book in library {
            out.line(book.title.clone());
        }
    }
}

pub fn scenario(out: &mut Transcript) -> Result<()> {
    let library: Library = ["War and Peace", "Fathers and Sons", "The Cherry Orchard"]
        .into_iter()
        .map(Book::new)
        .collect();

    Reader.see_books(&library, out);

    let mut cursor = library.iter();
    while cursor.next().is_some() {}
    if cursor.next().is_none() {
        out.line("No more books");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Library {
        ["A", "B", "C"].into_iter().map(Book::new).collect()
    }

    #[test]
    fn test_yields_in_order() {
        let library = shelf();
        let titles: Vec<&str> = library.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_exhausted_iterator_keeps_returning_none() {
        let library = shelf();
        let mut iter = library.iter();
        assert_eq!(iter.len(), 3);
        iter.by_ref().for_each(drop);

        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_restart_with_new_iterator() {
        let library = shelf();
        let mut first = library.iter();
        first.next();
        first.next();

        let mut fresh = library.iter();
        assert_eq!(fresh.next().map(|b| b.title.as_str()), Some("A"));
        assert_eq!(first.next().map(|b| b.title.as_str()), Some("C"));
    }

    #[test]
    fn test_empty_library() {
        let library = Library::new();
        assert!(library.is_empty());
        assert!(library.iter().next().is_none());
    }

    #[test]
    fn test_reader() {
        let mut out = Transcript::new();
        Reader.see_books(&shelf(), &mut out);
        assert_eq!(out.lines(), ["A", "B", "C"]);
    }
}
