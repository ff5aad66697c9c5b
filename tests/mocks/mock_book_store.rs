use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::storage::BookStore;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Mock book store for testing.
///
/// Keeps the "persisted" book in memory and tracks method calls for
/// verification. Clones share the same state, so a test can keep a handle
/// after moving the store into a session.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStore {
    saved: Rc<RefCell<Option<AddressBook>>>,
    call_counts: Rc<RefCell<HashMap<String, usize>>>,
    fail_saves: Rc<RefCell<bool>>,
}

#[allow(dead_code)]
impl MockBookStore {
    /// Create a store with nothing persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.saved.borrow_mut() = Some(book);
        store
    }

    /// Make every subsequent save fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.borrow_mut() = true;
    }

    /// The last saved book, if any.
    pub fn saved_book(&self) -> Option<AddressBook> {
        self.saved.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookStore for MockBookStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        if *self.fail_saves.borrow() {
            return Err(StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        *self.saved.borrow_mut() = Some(book.clone());
        Ok(())
    }
}
