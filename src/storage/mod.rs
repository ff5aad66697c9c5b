//! Address book persistence.
//!
//! The whole book is loaded once at startup and written back once at
//! shutdown. [`BookStore`] abstracts the backend so the command loop can be
//! exercised against an in-memory store in tests.

pub mod json_file;

pub use json_file::JsonFileStore;

use crate::error::StorageResult;
use crate::models::AddressBook;

/// Loads and saves a whole address book.
pub trait BookStore {
    /// Load the persisted book. A store with nothing persisted yet returns an
    /// empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the persisted book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
