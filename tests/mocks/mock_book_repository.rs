use contact_assistant::error::StorageResult;
use contact_assistant::{AddressBook, BookRepository};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Mock book repository for testing.
///
/// Keeps the snapshot in memory and counts saves. Clones share the same
/// snapshot, so a test can keep a handle after giving one to the assistant.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    stored: Rc<RefCell<Option<AddressBook>>>,
    save_count: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository with nothing stored yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.borrow_mut() = Some(book);
        repo
    }

    /// The last saved snapshot, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        *self.stored.borrow_mut() = Some(book.clone());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
