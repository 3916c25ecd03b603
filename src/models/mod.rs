//! Data models for the address book.
//!
//! This module contains the contact record and the address book that
//! stores records by name and answers birthday queries.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::Record;
