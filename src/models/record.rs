//! Record model: one contact with its phones and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at creation. Phones keep their insertion order and
/// duplicates are allowed; at most one birthday is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, also the record's key in an address book
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Optional birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it. An equal phone already on the record
    /// is not an error.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let position = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(position);
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// `new` is appended first and then the first `old` is removed, so the
    /// edited phone ends up last. Nothing changes when `old` is missing or
    /// `new` is invalid.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is not on the record, or
    /// `BookError::Validation` if `new` is not a valid phone.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        let new = PhoneNumber::new(new)?;
        self.phones.push(new);
        self.remove_phone(old)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.birthday.as_ref().map_or("N/A", Birthday::as_str);
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
