//! The command-driven assistant session.
//!
//! An [`Assistant`] owns the address book for one session: it loads the book
//! from a [`BookRepository`], reads command lines from a [`View`], applies
//! them to the book and saves the book when the session ends.

mod command;

pub use command::{Command, HELP_TEXT};

use crate::config::Config;
use crate::error::{BookError, CommandError, CommandResult, StorageResult};
use crate::matching::ContactMatcher;
use crate::models::{AddressBook, Record};
use crate::repositories::BookRepository;
use crate::view::View;
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const GOODBYE: &str = "Good bye!";

/// One interactive session over an address book.
pub struct Assistant<V, R> {
    book: AddressBook,
    view: V,
    repository: R,
    upcoming_days: u64,
    search_max_results: usize,
    search_min_confidence: u8,
    today: Option<NaiveDate>,
}

impl<V: View, R: BookRepository> Assistant<V, R> {
    /// Start a session, loading the book from `repository`.
    pub fn new(view: V, repository: R, config: &Config) -> StorageResult<Self> {
        let book = repository.load()?;
        info!("Session started with {} contacts", book.len());

        Ok(Self {
            book,
            view,
            repository,
            upcoming_days: config.upcoming_days,
            search_max_results: config.search_max_results,
            search_min_confidence: config.search_min_confidence,
            today: None,
        })
    }

    /// Use `today` instead of the local date for birthday queries.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Give back the view, e.g. to inspect what a scripted session showed.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Run the command loop until `close`/`exit` or end of input, then save.
    ///
    /// Command errors are shown to the user and the loop goes on; only
    /// console and storage failures end the session with an error.
    pub fn run(&mut self) -> CommandResult<()> {
        self.view.display(WELCOME)?;

        while let Some(line) = self.view.read_line(PROMPT)? {
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.view.display(&e.to_string())?;
                    continue;
                }
            };

            if command == Command::Exit {
                break;
            }

            debug!("Executing {:?}", command);
            match self.execute(command) {
                Ok(message) => self.view.display(&message)?,
                Err(e) => {
                    warn!("Command failed: {}", e);
                    self.view.display(&e.to_string())?;
                }
            }
        }

        self.repository.save(&self.book)?;
        info!("Session ended with {} contacts saved", self.book.len());
        self.view.display(GOODBYE)?;
        Ok(())
    }

    /// Apply one command to the book and return the message to show.
    pub fn execute(&mut self, command: Command) -> CommandResult<String> {
        let message = match command {
            Command::Add { name, phone } => match self.book.find_mut(&name) {
                Some(record) => {
                    if let Some(phone) = phone {
                        record.add_phone(&phone)?;
                    }
                    "Contact updated.".to_string()
                }
                None => {
                    let mut record = Record::new(name).map_err(BookError::from)?;
                    if let Some(phone) = phone {
                        record.add_phone(&phone)?;
                    }
                    self.book.add_record(record);
                    "Contact added.".to_string()
                }
            },
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                self.record_mut(&name)?
                    .edit_phone(&old_phone, &new_phone)?;
                "Contact updated.".to_string()
            }
            Command::Phone { name } => self.record(&name)?.to_string(),
            Command::RemovePhone { name, phone } => {
                self.record_mut(&name)?.remove_phone(&phone)?;
                "Phone removed.".to_string()
            }
            Command::Delete { name } => {
                self.book.delete(&name).map_err(|e| match e {
                    BookError::ContactNotFound(name) => CommandError::ContactNotFound(name),
                    other => other.into(),
                })?;
                "Contact deleted.".to_string()
            }
            Command::AddBirthday { name, birthday } => {
                self.record_mut(&name)?.add_birthday(&birthday)?;
                "Birthday added.".to_string()
            }
            Command::ShowBirthday { name } => {
                match self.book.find(&name).and_then(Record::birthday) {
                    Some(birthday) => format!("Birthday: {}", birthday),
                    None => "Birthday not found.".to_string(),
                }
            }
            Command::Birthdays => {
                let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                let upcoming = self
                    .book
                    .get_upcoming_birthdays_within(today, self.upcoming_days);
                if upcoming.is_empty() {
                    "No upcoming birthdays.".to_string()
                } else {
                    join_lines(upcoming)
                }
            }
            Command::Search { query } => {
                let results = ContactMatcher::new().search(
                    &query,
                    &self.book,
                    self.search_max_results,
                    self.search_min_confidence,
                );
                if results.is_empty() {
                    "No matching contacts.".to_string()
                } else {
                    join_lines(results)
                }
            }
            Command::All => {
                if self.book.is_empty() {
                    "No contacts found.".to_string()
                } else {
                    self.book.to_string()
                }
            }
            Command::Help => HELP_TEXT.to_string(),
            Command::Exit => GOODBYE.to_string(),
        };

        Ok(message)
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}

fn join_lines<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
