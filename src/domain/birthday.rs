//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format used both for parsing and for rendering birthday dates.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Zero-padded day and month, four-digit year. chrono alone would also
/// accept `1.1.2000`.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A type-safe wrapper for birthdays.
///
/// The original `DD.MM.YYYY` string is the stored value; the calendar date is
/// parsed again whenever it is needed.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.as_str(), "29.02.2000");
/// assert!(Birthday::new("29.02.2001").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new Birthday, validating shape and calendar range.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a real
    /// date written as `DD.MM.YYYY`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if Self::parse(&value).is_none() {
            return Err(ValidationError::InvalidBirthday(value));
        }

        Ok(Self(value))
    }

    fn parse(value: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_SHAPE.is_match(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok()
    }

    /// Get the birthday as it was entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        // SAFETY: Constructor validates the value parses
        Self::parse(&self.0).expect("birthday validated to be a real date")
    }

    /// The birthday's day and month placed in `year`.
    ///
    /// Returns `None` for 29 February when `year` is not a leap year.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let date = self.date();
        NaiveDate::from_ymd_opt(year, date.month(), date.day())
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
