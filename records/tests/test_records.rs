use std::fs;

use record_keeper::session::{run_catalog, run_users, CatalogKind};
use record_keeper::{apply, Catalog, Command, Contact, ContactFile, Outcome, UserFile};
use regex_validator::Prompter;
use tempfile::tempdir;

#[test]
fn test_catalog_commands_chain() {
    let catalog = Catalog::reading_list();
    let (catalog, added) = apply(catalog, Command::Add { key: "Fox Mulder".into(), value: "i want to believe".into() });
    let (catalog, edited) = apply(catalog, Command::Edit { key: "FOX MULDER".into(), value: "trust no one".into() });
    let (catalog, deleted) = apply(catalog, Command::Delete("alice smith".into()));

    assert!(matches!(added, Outcome::Added { .. }));
    assert!(matches!(edited, Outcome::Updated { ref value, .. } if value == "Trust No One"));
    assert!(matches!(deleted, Outcome::Deleted { .. }));
    assert_eq!(catalog.len(), 4);
    assert_eq!(
        catalog.keys().collect::<Vec<_>>(),
        vec!["bill bower", "carol smith", "fox mulder", "hassan hassan"]
    );
}

#[test]
fn test_catalog_serializes_as_plain_object() {
    let json = serde_json::to_value(Catalog::accounts()).unwrap();
    assert_eq!(json["jsmith"], "John Smith");
}

#[test]
fn test_catalog_session_exit_keeps_seed() {
    let mut p = Prompter::new("exit\n".as_bytes(), Vec::new());
    let catalog = run_catalog(&mut p, CatalogKind::Accounts, CatalogKind::Accounts.seed()).unwrap();
    assert_eq!(catalog, Catalog::accounts());
}

#[test]
fn test_contact_file_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("contacts.csv");
    let contact = Contact {
        name: "Sally Strudel".to_string(),
        email: "sstudent@example.edu".to_string(),
        phone: "(612) 555-0199".to_string(),
    };

    ContactFile::new(&path).append(&contact).unwrap();
    let contacts = ContactFile::new(&path).read().unwrap().unwrap();
    assert_eq!(contacts, vec![contact]);
}

#[test]
fn test_users_session_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("user_manager_txt");
    fs::write(&path, "ann ann@example.com\n").unwrap();

    let users = UserFile::new(&path);
    let mut p = Prompter::new("view\nexit\n".as_bytes(), Vec::new());
    run_users(&mut p, &users).unwrap();

    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("File already exists, no need to initialize."));
    assert!(out.contains("Username: ann"));
    assert_eq!(users.read().unwrap().users.len(), 1);
}
