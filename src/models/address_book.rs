//! AddressBook model: the full collection of records keyed by name.

use super::record::Record;
use crate::domain::BIRTHDAY_FORMAT;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Length of the upcoming-birthday window in days, counted after today.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// A birthday falling inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The birthday's day and month in the current year
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// Records keyed by contact name, iterated in insertion order.
///
/// Every record is stored under its own name and names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// A record already stored under that name is replaced without merging
    /// and the new one takes its place in iteration order.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(record.name().as_str()) {
            Some(&position) => self.records[position] = record,
            None => {
                self.index
                    .insert(record.name().as_str().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Exact-match lookup by name for mutation.
    ///
    /// The record's name cannot be changed through the returned reference,
    /// so the key invariant holds.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let position = self
            .index
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        let removed = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Birthdays from `today` through `today + 7 days`, inclusive.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.get_upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Birthdays from `today` through `today + days`, inclusive.
    ///
    /// Each birthday is placed in `today`'s year only. One that already
    /// passed this year is not reported even if next year's occurrence is
    /// inside the window, and 29 February is skipped in common years.
    pub fn get_upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        days: u64,
    ) -> Vec<UpcomingBirthday> {
        let last_day = today
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX);

        self.records
            .iter()
            .filter_map(|record| {
                let occurrence = record.birthday()?.occurrence_in(today.year())?;
                (today..=last_day)
                    .contains(&occurrence)
                    .then(|| UpcomingBirthday {
                        name: record.name().to_string(),
                        date: occurrence,
                    })
            })
            .collect()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serde support - serialize as an ordered list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.records)
    }
}

// Serde support - rebuild the name index, later duplicates win
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records: Vec<Record> = Vec::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    fn upcoming_names(book: &AddressBook, today: NaiveDate) -> Vec<String> {
        book.get_upcoming_birthdays(today)
            .into_iter()
            .map(|b| b.name)
            .collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1111111111"], None));

        let found = book.find("John").unwrap();
        assert_eq!(found.phones()[0].as_str(), "1111111111");
        assert!(book.find("john").is_none());
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1111111111"], Some("01.01.2000")));
        book.add_record(record("Jane", &[], None));
        book.add_record(record("John", &["2222222222"], None));

        assert_eq!(book.len(), 2);
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane"]);

        let john = book.find("John").unwrap();
        assert_eq!(john.phones().len(), 1);
        assert_eq!(john.phones()[0].as_str(), "2222222222");
        assert!(john.birthday().is_none());
    }

    #[test]
    fn test_find_mut_changes_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[], None));

        book.find_mut("John")
            .unwrap()
            .add_phone("1111111111")
            .unwrap();
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
        assert!(book.find_mut("Nobody").is_none());
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("A", &[], None));
        book.add_record(record("B", &[], None));
        book.add_record(record("C", &[], None));

        let removed = book.delete("B").unwrap();
        assert_eq!(removed.name().as_str(), "B");
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["A", "C"]);
        assert!(book.find("C").is_some());
        assert!(book.find("B").is_none());

        book.add_record(record("B", &[], None));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_delete_missing_fails() {
        let mut book = AddressBook::new();
        book.add_record(record("A", &[], None));
        let err = book.delete("Z").unwrap_err();
        assert_eq!(err, BookError::ContactNotFound("Z".to_string()));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_upcoming_window_is_inclusive() {
        let mut book = AddressBook::new();
        book.add_record(record("Today", &[], Some("01.06.1990")));
        book.add_record(record("LastDay", &[], Some("08.06.1985")));
        book.add_record(record("TooLate", &[], Some("09.06.1985")));
        book.add_record(record("Yesterday", &[], Some("31.05.1970")));
        book.add_record(record("NoBirthday", &[], None));

        let upcoming = book.get_upcoming_birthdays(date(2024, 6, 1));
        assert_eq!(
            upcoming,
            vec![
                UpcomingBirthday {
                    name: "Today".to_string(),
                    date: date(2024, 6, 1),
                },
                UpcomingBirthday {
                    name: "LastDay".to_string(),
                    date: date(2024, 6, 8),
                },
            ]
        );
    }

    #[test]
    fn test_upcoming_follows_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Later", &[], Some("05.06.2000")));
        book.add_record(record("Sooner", &[], Some("02.06.2000")));

        assert_eq!(
            upcoming_names(&book, date(2024, 6, 1)),
            vec!["Later", "Sooner"]
        );
    }

    #[test]
    fn test_upcoming_does_not_wrap_year_end() {
        let mut book = AddressBook::new();
        book.add_record(record("December", &[], Some("29.12.1990")));
        book.add_record(record("January", &[], Some("02.01.1990")));

        assert!(upcoming_names(&book, date(2024, 12, 30)).is_empty());
        assert_eq!(upcoming_names(&book, date(2024, 12, 28)), vec!["December"]);
    }

    #[test]
    fn test_upcoming_skips_leap_day_in_common_year() {
        let mut book = AddressBook::new();
        book.add_record(record("Leap", &[], Some("29.02.2000")));

        assert!(upcoming_names(&book, date(2023, 2, 25)).is_empty());
        assert_eq!(upcoming_names(&book, date(2024, 2, 25)), vec!["Leap"]);
    }

    #[test]
    fn test_upcoming_custom_window() {
        let mut book = AddressBook::new();
        book.add_record(record("Far", &[], Some("20.06.2000")));

        let today = date(2024, 6, 1);
        assert!(book.get_upcoming_birthdays_within(today, 7).is_empty());
        assert_eq!(book.get_upcoming_birthdays_within(today, 19).len(), 1);
        assert!(book.get_upcoming_birthdays_within(today, 0).is_empty());
    }

    #[test]
    fn test_upcoming_birthday_display() {
        let upcoming = UpcomingBirthday {
            name: "John".to_string(),
            date: date(2024, 6, 8),
        };
        assert_eq!(upcoming.to_string(), "John: 08.06.2024");
    }

    #[test]
    fn test_display() {
        let mut book = AddressBook::new();
        assert_eq!(book.to_string(), "");

        book.add_record(record("John", &["1111111111"], None));
        book.add_record(record("Jane", &[], Some("01.01.2000")));
        assert_eq!(
            book.to_string(),
            "Contact name: John, phones: 1111111111, birthday: N/A\n\
             Contact name: Jane, phones: , birthday: 01.01.2000"
        );
    }

    #[test]
    fn test_serde_round_trip_preserves_everything() {
        let mut book = AddressBook::new();
        book.add_record(record(
            "John",
            &["2222222222", "1111111111", "2222222222"],
            Some("29.02.2000"),
        ));
        book.add_record(record("Jane", &[], None));
        book.add_record(record("Alex", &["3333333333"], Some("01.01.1999")));

        let json = serde_json::to_string(&book).unwrap();
        let restored: AddressBook = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, book);
        assert_eq!(
            restored.names().collect::<Vec<_>>(),
            vec!["John", "Jane", "Alex"]
        );
    }

    #[test]
    fn test_deserialize_duplicate_names_keeps_last() {
        let json = r#"[
            {"name": "John", "phones": ["1111111111"]},
            {"name": "John", "phones": ["2222222222"]}
        ]"#;
        let book: AddressBook = serde_json::from_str(json).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(
            book.find("John").unwrap().phones()[0].as_str(),
            "2222222222"
        );
    }
}
