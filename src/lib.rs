//! Contact Assistant - a console address book with birthday reminders.
//!
//! This library provides the address book model and the command-driven
//! assistant that edits it, with the book persisted between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phone numbers and birthdays
//! - **models**: Contact records and the address book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **matching**: Fuzzy name and exact phone search
//! - **repositories**: Loading and saving the address book snapshot
//! - **view**: Console input/output boundary
//! - **assistant**: Command parsing and the interactive session

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod view;

pub use assistant::{Assistant, Command};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use matching::{ContactMatcher, MatchResult, MatchType};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
pub use view::{ConsoleView, View};
