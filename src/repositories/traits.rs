use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for the address book snapshot.
///
/// Provides abstraction over where the book lives between sessions,
/// enabling different implementations (JSON file, in-memory for tests).
pub trait BookRepository {
    /// Load the stored book. A store that was never written yields an
    /// empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
