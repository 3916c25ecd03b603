//! Sessions that persist the address book to a real snapshot file.

mod mocks;

use contact_assistant::{AddressBook, Assistant, BookRepository, Config, JsonFileRepository, Record};
use mocks::ScriptedView;
use std::path::Path;

fn run_session(path: &Path, lines: &[&str]) -> Vec<String> {
    let config = Config {
        book_path: path.to_path_buf(),
        ..Config::default()
    };
    let repository = JsonFileRepository::new(&config.book_path);
    let mut assistant = Assistant::new(ScriptedView::new(lines), repository, &config).unwrap();
    assistant.run().unwrap();
    assistant.into_view().messages().to_vec()
}

#[test]
fn test_book_survives_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");

    run_session(
        &path,
        &[
            "add John 1111111111",
            "add John 2222222222",
            "add-birthday John 25.12.1990",
            "add Jane",
            "exit",
        ],
    );
    assert!(path.exists());

    let messages = run_session(&path, &["all", "exit"]);
    assert_eq!(
        messages[1],
        "Contact name: John, phones: 1111111111; 2222222222, birthday: 25.12.1990\n\
         Contact name: Jane, phones: , birthday: N/A"
    );
}

#[test]
fn test_first_session_without_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let messages = run_session(&path, &["all", "exit"]);
    assert_eq!(messages[1], "No contacts found.");
    // Exit writes an empty snapshot
    assert!(JsonFileRepository::new(&path).load().unwrap().is_empty());
}

#[test]
fn test_repository_round_trip_is_value_equivalent() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("book.json"));

    let mut first = Record::new("Zed").unwrap();
    first.add_phone("3333333333").unwrap();
    first.add_phone("1111111111").unwrap();
    first.add_phone("3333333333").unwrap();
    first.add_birthday("29.02.2000").unwrap();
    let second = Record::new("Amy").unwrap();
    let book: AddressBook = [first, second].into_iter().collect();

    repo.save(&book).unwrap();
    let restored = repo.load().unwrap();

    assert_eq!(restored.names().collect::<Vec<_>>(), vec!["Zed", "Amy"]);
    for record in &book {
        let other = restored.find(record.name().as_str()).unwrap();
        assert_eq!(other.phones(), record.phones());
        assert_eq!(other.birthday(), record.birthday());
    }
}
