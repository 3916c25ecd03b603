//! Command-line grammar of the assistant.
//!
//! The first whitespace-separated word names the command (case-insensitive),
//! the remaining words are its arguments. Contact names are single words.

use crate::error::{CommandError, CommandResult};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a contact or add a phone to an existing one
    Add { name: String, phone: Option<String> },

    /// Replace one phone of a contact
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact
    Phone { name: String },

    /// Remove one phone of a contact
    RemovePhone { name: String, phone: String },

    /// Remove a contact
    Delete { name: String },

    /// Set a contact's birthday
    AddBirthday { name: String, birthday: String },

    /// Show a contact's birthday
    ShowBirthday { name: String },

    /// List birthdays in the upcoming window
    Birthdays,

    /// Fuzzy search by name or exact phone
    Search { query: String },

    /// Show every contact
    All,

    /// Show the command list
    Help,

    /// Save and end the session
    Exit,
}

const ADD_USAGE: &str = "add <name> [phone]";
const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
const PHONE_USAGE: &str = "phone <name>";
const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";
const DELETE_USAGE: &str = "delete <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";
const SEARCH_USAGE: &str = "search <name or phone>";

/// Text shown by the `help` command.
pub const HELP_TEXT: &str = "Available commands:
  add <name> [phone]                       add a contact or a phone to it
  change <name> <old phone> <new phone>    replace a phone
  phone <name>                             show a contact
  remove-phone <name> <phone>              remove a phone
  delete <name>                            delete a contact
  add-birthday <name> <DD.MM.YYYY>         set a birthday
  show-birthday <name>                     show a birthday
  birthdays                                birthdays in the coming week
  search <name or phone>                   find contacts
  all                                      show all contacts
  help                                     show this list
  close | exit                             save and quit";

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Words after the last expected
    /// argument are ignored for `add`, `phone`, `show-birthday` and the
    /// argument-less commands.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match keyword.to_lowercase().as_str() {
            "add" => match args.as_slice() {
                [name] => Command::Add {
                    name: name.to_string(),
                    phone: None,
                },
                [name, phone, ..] => Command::Add {
                    name: name.to_string(),
                    phone: Some(phone.to_string()),
                },
                _ => return Err(usage(ADD_USAGE)),
            },
            "change" => match args.as_slice() {
                [name, old_phone, new_phone] => Command::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                },
                _ => return Err(usage(CHANGE_USAGE)),
            },
            "phone" => Command::Phone {
                name: first(&args, PHONE_USAGE)?,
            },
            "remove-phone" => match args.as_slice() {
                [name, phone] => Command::RemovePhone {
                    name: name.to_string(),
                    phone: phone.to_string(),
                },
                _ => return Err(usage(REMOVE_PHONE_USAGE)),
            },
            "delete" => match args.as_slice() {
                [name] => Command::Delete {
                    name: name.to_string(),
                },
                _ => return Err(usage(DELETE_USAGE)),
            },
            "add-birthday" => match args.as_slice() {
                [name, birthday] => Command::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                },
                _ => return Err(usage(ADD_BIRTHDAY_USAGE)),
            },
            "show-birthday" => Command::ShowBirthday {
                name: first(&args, SHOW_BIRTHDAY_USAGE)?,
            },
            "birthdays" => Command::Birthdays,
            "search" if !args.is_empty() => Command::Search {
                query: args.join(" "),
            },
            "search" => return Err(usage(SEARCH_USAGE)),
            "all" => Command::All,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::InvalidCommand),
        };

        Ok(Some(command))
    }
}

fn usage(usage: &'static str) -> CommandError {
    CommandError::InvalidArguments { usage }
}

fn first(args: &[&str], usage_text: &'static str) -> CommandResult<String> {
    args.first()
        .map(|arg| arg.to_string())
        .ok_or_else(|| usage(usage_text))
}
