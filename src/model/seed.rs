//! Sample records loaded into the in-memory store on startup.

use super::{Author, Book};

const AUTHORS: &[(&str, &str)] = &[
    ("1", "J. K. Rowling"),
    ("2", "J. R. R. Tolkien"),
    ("3", "Brent Weeks"),
];

const BOOKS: &[(&str, &str, &str)] = &[
    ("1", "Harry Potter and the Chamber of Secrets", "1"),
    ("2", "Harry Potter and the Prisoner of Azkaban", "1"),
    ("3", "Harry Potter and the Goblet of Fire", "1"),
    ("4", "The Fellowship of the Ring", "2"),
    ("5", "The Two Towers", "2"),
    ("6", "The Return of the King", "2"),
    ("7", "The Way of Shadows", "3"),
    ("8", "Beyond the Shadows", "3"),
];

pub fn authors() -> Vec<Author> {
    AUTHORS
        .iter()
        .map(|(id, name)| Author::new(id.to_string(), name.to_string()))
        .collect()
}

pub fn books() -> Vec<Book> {
    BOOKS
        .iter()
        .map(|(id, name, author_id)| {
            Book::new(id.to_string(), name.to_string(), author_id.to_string())
        })
        .collect()
}
