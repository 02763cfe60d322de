//! In-memory book collection
//!
//! Holds the ordered list of records and the identifier counter that feeds new ids.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Caller-supplied book fields.
///
/// Values are kept exactly as sent. A field that was not sent stays `None` and is
/// omitted on output; an explicit `null` is kept as `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<Value>,
}

impl BookFields {
    /// Picks the four book keys out of a decoded body; every other key is ignored.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            name: object.get("name").cloned(),
            author: object.get("author").cloned(),
            year: object.get("year").cloned(),
            available: object.get("available").cloned(),
        }
    }

    /// Only a JSON object carries fields. Arrays and other values yield no fields.
    pub fn from_value(value: &Value) -> Self {
        value.as_object().map(Self::from_object).unwrap_or_default()
    }

    /// Overwrites every field present in `patch`, leaving the others untouched.
    pub fn merge(&mut self, patch: BookFields) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(author) = patch.author {
            self.author = Some(author);
        }
        if let Some(year) = patch.year {
            self.year = Some(year);
        }
        if let Some(available) = patch.available {
            self.available = Some(available);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: u64,
    #[serde(flatten)]
    pub fields: BookFields,
}

#[derive(Debug)]
pub struct Library {
    books: Vec<Book>,
    next_id: u64,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self, fields: BookFields) -> Book {
        let book = Book {
            id: self.next_id,
            fields,
        };
        self.next_id += 1;
        self.books.push(book.clone());
        book
    }

    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: u64) -> Result<&Book, AppError> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or(AppError::NotFound)
    }

    /// Shallow-merges `patch` into the stored record; the id is never taken from the patch.
    pub fn update(&mut self, id: u64, patch: BookFields) -> Result<Book, AppError> {
        let index = self.position(id)?;
        let mut merged = self.books[index].clone();
        merged.fields.merge(patch);
        self.books[index] = merged.clone();
        Ok(merged)
    }

    pub fn delete(&mut self, id: u64) -> Result<Book, AppError> {
        let index = self.position(id)?;
        Ok(self.books.remove(index))
    }

    /// Empties the collection and restarts ids at 1.
    pub fn reset(&mut self) {
        self.books.clear();
        self.next_id = 1;
    }

    fn position(&self, id: u64) -> Result<usize, AppError> {
        self.books
            .iter()
            .position(|book| book.id == id)
            .ok_or(AppError::NotFound)
    }
}

/// Parses a path segment into a book id.
///
/// Leading whitespace and a `+` sign are skipped and the leading run of decimal
/// digits is read, so `"12abc"` yields 12. Segments without leading digits,
/// negative numbers and values past `u64::MAX` yield `None`, since no stored id
/// can match them.
pub fn parse_book_id(segment: &str) -> Option<u64> {
    let trimmed = segment.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    unsigned[..digits].parse().ok()
}
