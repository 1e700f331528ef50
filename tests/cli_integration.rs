use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn contacts(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contacts").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_add_show_and_persist() {
    let home = tempfile::tempdir().unwrap();

    contacts(&home)
        .args(["add", "John", "-b", "26.11.2002", "-p", "1234567890", "-p", "555-555-5555"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact saved: Contact name: John, birthday: 26.11.2002, phones: 1234567890; 5555555555",
        ));

    let saved = fs::read_to_string(home.path().join("contacts.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["contacts"][0]["name"], "John");
    assert_eq!(json["contacts"][0]["birthday"], "26.11.2002");
    assert_eq!(json["contacts"][0]["phones"][1], "5555555555");

    contacts(&home)
        .args(["show", "John"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: John"))
        .stdout(predicate::str::contains("birthday"));
}

#[test]
fn test_invalid_input_warns_but_succeeds() {
    let home = tempfile::tempdir().unwrap();

    contacts(&home)
        .args(["add", "Jane", "-b", "2002-11-26", "-p", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Incorrect date 2002-11-26. Date in format DD.MM.YYYY is required.",
        ))
        .stdout(predicate::str::contains("Incorrect phone number 12345."))
        .stdout(predicate::str::contains("Contact saved: Contact name: Jane\n"));
}

#[test]
fn test_list_and_search() {
    let home = tempfile::tempdir().unwrap();
    contacts(&home).args(["add", "Anna"]).assert().success();
    contacts(&home)
        .args(["add", "Bob", "-p", "5551234567"])
        .assert()
        .success();

    contacts(&home)
        .args(["list", "--no-pause", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Anna\nContact name: Bob"));

    contacts(&home)
        .args(["search", "nn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna"))
        .stdout(predicate::str::contains("Bob").not());

    contacts(&home)
        .args(["search", "AN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."))
        .stdout(predicate::str::contains("Anna").not());

    contacts(&home)
        .args(["search", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: Bob, phone: 5551234567"));
}

#[test]
fn test_empty_book_lists_nothing() {
    let home = tempfile::tempdir().unwrap();
    contacts(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
    assert!(!home.path().join("contacts.json").exists());
}

#[test]
fn test_phone_commands() {
    let home = tempfile::tempdir().unwrap();
    contacts(&home)
        .args(["add", "John", "-p", "1234567890"])
        .assert()
        .success();

    contacts(&home)
        .args(["phone", "edit", "John", "1234567890", "111 222 3333"])
        .assert()
        .success();
    contacts(&home)
        .args(["phone", "edit", "John", "1112223333", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect phone number nope."));
    contacts(&home)
        .args(["phone", "find", "John", "1112223333"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1112223333"));
    contacts(&home)
        .args(["phone", "remove", "John", "9999999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone number 9999999999 not found."));
}

#[test]
fn test_delete_missing_contact_fails() {
    let home = tempfile::tempdir().unwrap();
    contacts(&home).args(["add", "Jane"]).assert().success();
    contacts(&home).args(["delete", "Jane"]).assert().success();

    contacts(&home)
        .args(["rm", "Jane"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact not found: Jane"));
}

#[test]
fn test_load_drops_invalid_entries() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join("contacts.json"),
        r#"{"contacts": [{"name": "Old", "birthday": "99.99.1999", "phones": ["1", "0987654321"]}]}"#,
    )
    .unwrap();

    contacts(&home)
        .args(["show", "Old"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect date 99.99.1999."))
        .stdout(predicate::str::contains("Incorrect phone number 1."))
        .stdout(predicate::str::contains("Contact name: Old, phone: 0987654321"));
}

#[test]
fn test_config_date_format() {
    let home = tempfile::tempdir().unwrap();
    contacts(&home)
        .args(["add", "John", "-b", "26.11.2002"])
        .assert()
        .success();

    contacts(&home)
        .args(["config", "date-format", "month-first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date-format set to month-first"));

    contacts(&home)
        .args(["show", "John"])
        .assert()
        .success()
        .stdout(predicate::str::contains("birthday: 11/26/2002"));

    contacts(&home)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 5"));
}

#[test]
fn test_corrupt_config_fails_without_touching_contacts() {
    let home = tempfile::tempdir().unwrap();
    contacts(&home)
        .args(["config", "date-format", "month-first"])
        .assert()
        .success();
    contacts(&home)
        .args(["add", "John", "-b", "11/26/2002"])
        .assert()
        .success();

    let config_file = home.path().join(".config/contactbook/config.json");
    assert!(config_file.exists());
    fs::write(&config_file, "{ oops").unwrap();

    contacts(&home)
        .args(["add", "Jane"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));

    let saved = fs::read_to_string(home.path().join("contacts.json")).unwrap();
    assert!(saved.contains("11/26/2002"));
    assert!(!saved.contains("Jane"));
}
