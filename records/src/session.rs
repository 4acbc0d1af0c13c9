//! Interactive menus over the record stores.

use std::io::{BufRead, Write};

use tracing::{debug, error};

use regex_validator::patterns::{email, phonenumber};
use regex_validator::prompt::Prompter;
use regex_validator::text::title_case;

use crate::catalog::{apply, Catalog, Command, Outcome};
use crate::contacts::{render_contacts, Contact, ContactFile};
use crate::error::{RecordError, RecordResult};
use crate::users::{parse_batch, render_user, UserFile};

/// Which seeded catalog a command session is editing; drives the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Readings,
    Accounts,
}

impl CatalogKind {
    pub fn seed(self) -> Catalog {
        match self {
            CatalogKind::Readings => Catalog::reading_list(),
            CatalogKind::Accounts => Catalog::accounts(),
        }
    }

    fn welcome(self) -> &'static str {
        match self {
            CatalogKind::Readings => "Welcome to the Reading List Management Program.",
            CatalogKind::Accounts => "Welcome to the Username and Full Name Management Program.",
        }
    }

    fn key_noun(self) -> &'static str {
        match self {
            CatalogKind::Readings => "author",
            CatalogKind::Accounts => "username",
        }
    }

    fn value_noun(self) -> &'static str {
        match self {
            CatalogKind::Readings => "title",
            CatalogKind::Accounts => "full name",
        }
    }

    fn menu(self) -> &'static str {
        match self {
            CatalogKind::Readings => {
                "COMMAND MENU\n\
                 view  - View the reading list\n\
                 add   - Add a reading\n\
                 edit  - Edit a reading\n\
                 del   - Delete a reading\n\
                 exit  - Exit program\n"
            }
            CatalogKind::Accounts => {
                "COMMAND MENU\n\
                 view  - View user name\n\
                 add   - Add a user\n\
                 edit  - Edit a user\n\
                 del   - Delete a user\n\
                 exit  - Exit program\n"
            }
        }
    }

    fn key_display(self, key: &str) -> String {
        match self {
            CatalogKind::Readings => title_case(key),
            CatalogKind::Accounts => key.to_string(),
        }
    }

    fn describe(self, outcome: &Outcome) -> String {
        let noun = self.key_noun();
        match outcome {
            Outcome::Found { value, .. } => format!("{}: {}.\n", capitalize_noun(self.value_noun()), value),
            Outcome::Added { key, value } => {
                format!("{} {} and {} {} were added.\n", capitalize_noun(noun), self.key_display(key), self.value_noun(), value)
            }
            Outcome::AlreadyExists { value, .. } => match self {
                CatalogKind::Readings => format!("{} is already associated with this author.\n", value),
                CatalogKind::Accounts => format!("{} is already using this username.\n", value),
            },
            Outcome::Updated { key, value } => format!(
                "The {} for {} has been updated to {}.\n",
                self.value_noun(),
                self.key_display(key),
                value
            ),
            Outcome::Deleted { key, value } => format!(
                "{} {} and {} {} were deleted.\n",
                capitalize_noun(noun),
                self.key_display(key),
                self.value_noun(),
                value
            ),
            Outcome::NotFound(_) => match self {
                CatalogKind::Readings => "There is no reading with that author name.\n".to_string(),
                CatalogKind::Accounts => "There is no user with that username.\n".to_string(),
            },
        }
    }
}

fn capitalize_noun(noun: &str) -> String {
    regex_validator::text::capitalize(noun)
}

/// Runs the command loop and hands back the catalog as the user left it.
pub fn run_catalog<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    kind: CatalogKind,
    mut catalog: Catalog,
) -> RecordResult<Catalog> {
    p.say(kind.welcome())?;
    p.say(kind.menu())?;

    loop {
        let command = p.line("Command: ")?.trim().to_lowercase();
        debug!(command = %command, "catalog command");
        catalog = match command.as_str() {
            "view" => view_entry(p, kind, catalog)?,
            "add" => add_entry(p, kind, catalog)?,
            "edit" => edit_entry(p, kind, catalog)?,
            "del" => delete_entry(p, kind, catalog)?,
            "exit" => {
                p.say("Bye!")?;
                return Ok(catalog);
            }
            _ => {
                p.say("Not a valid command. Please try again.\n")?;
                p.say(kind.menu())?;
                continue;
            }
        };

        if !p.again("\nWould you like to continue? Enter y or n: ")? {
            p.say("Thanks for using the program!")?;
            return Ok(catalog);
        }
        p.say("\nRestarting the program...")?;
        p.say(kind.menu())?;
    }
}

fn list_keys<R: BufRead, W: Write>(p: &mut Prompter<R, W>, kind: CatalogKind, catalog: &Catalog) -> RecordResult<()> {
    if kind == CatalogKind::Readings {
        let authors: Vec<String> = catalog.keys().map(title_case).collect();
        p.say(format!("Authors: {}", authors.join(", ")))?;
    }
    Ok(())
}

fn view_entry<R: BufRead, W: Write>(p: &mut Prompter<R, W>, kind: CatalogKind, catalog: Catalog) -> RecordResult<Catalog> {
    list_keys(p, kind, &catalog)?;
    let key = p.line(&format!("Enter the {} to view: ", kind.key_noun()))?;
    let (catalog, outcome) = apply(catalog, Command::View(key));
    p.say(kind.describe(&outcome))?;
    Ok(catalog)
}

fn add_entry<R: BufRead, W: Write>(p: &mut Prompter<R, W>, kind: CatalogKind, catalog: Catalog) -> RecordResult<Catalog> {
    list_keys(p, kind, &catalog)?;
    let key = p.non_blank(&format!("Enter the new {}: ", kind.key_noun()))?;

    // Ask for the value only when the key is free
    if let Some(existing) = catalog.get(&key) {
        let outcome = Outcome::AlreadyExists {
            key: key.clone(),
            value: existing.to_string(),
        };
        p.say(kind.describe(&outcome))?;
        return Ok(catalog);
    }

    let value = p.non_blank(&format!("Enter the {}: ", kind.value_noun()))?;
    let (catalog, outcome) = apply(catalog, Command::Add { key, value });
    p.say(kind.describe(&outcome))?;
    Ok(catalog)
}

fn edit_entry<R: BufRead, W: Write>(p: &mut Prompter<R, W>, kind: CatalogKind, catalog: Catalog) -> RecordResult<Catalog> {
    list_keys(p, kind, &catalog)?;
    let key = p.line(&format!("Enter the {} to edit: ", kind.key_noun()))?;

    if !catalog.contains(&key) {
        let (catalog, outcome) = apply(catalog, Command::View(key));
        p.say(kind.describe(&outcome))?;
        return Ok(catalog);
    }

    let value = p.non_blank(&format!(
        "Enter the new {} for {}: ",
        kind.value_noun(),
        kind.key_display(key.trim())
    ))?;
    let (catalog, outcome) = apply(catalog, Command::Edit { key, value });
    p.say(kind.describe(&outcome))?;
    Ok(catalog)
}

fn delete_entry<R: BufRead, W: Write>(p: &mut Prompter<R, W>, kind: CatalogKind, mut catalog: Catalog) -> RecordResult<Catalog> {
    loop {
        p.say("Current entries:")?;
        for (key, value) in catalog.iter() {
            p.say(format!("{} - {}", kind.key_display(key), value))?;
        }

        let key = p.line(&format!("\nEnter the {} to delete: ", kind.key_noun()))?;
        let (updated, outcome) = apply(catalog, Command::Delete(key));
        catalog = updated;
        p.say(kind.describe(&outcome))?;

        if !matches!(outcome, Outcome::NotFound(_)) {
            return Ok(catalog);
        }
        if !p.yes_no("Would you like to try deleting another entry? (y/n): ")? {
            p.say("Returning to the main menu.\n")?;
            return Ok(catalog);
        }
    }
}

const CONTACT_MENU: [&str; 3] = ["View", "Add", "Exit"];

pub fn run_contacts<R: BufRead, W: Write>(p: &mut Prompter<R, W>, book: &ContactFile) -> RecordResult<()> {
    p.say(format!("The contacts file is stored at: {}", book.path().display()))?;
    loop {
        match p.menu("\nPlease select one of the following:\n", &CONTACT_MENU)? {
            0 => view_contacts(p, book)?,
            1 => add_contact(p, book)?,
            _ => {
                p.say("\nThanks for using the program!")?;
                return Ok(());
            }
        }
    }
}

fn view_contacts<R: BufRead, W: Write>(p: &mut Prompter<R, W>, book: &ContactFile) -> RecordResult<()> {
    match book.read() {
        Ok(None) => p.say("\nNo contacts found. The file does not exist yet.")?,
        Ok(Some(contacts)) if contacts.is_empty() => p.say("\nNo contacts to display.")?,
        Ok(Some(contacts)) => p.say(format!("\n{}", render_contacts(&contacts)))?,
        Err(e @ RecordError::Malformed { .. }) => {
            error!("{}", e);
            p.say(format!("\nThe contacts file could not be read: {}", e))?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn add_contact<R: BufRead, W: Write>(p: &mut Prompter<R, W>, book: &ContactFile) -> RecordResult<()> {
    p.say("\nEnter the contact details:")?;
    let name = p.non_blank("Enter the contact's name: ")?;
    let email = p.until("Enter the contact's email: ", |answer| {
        let answer = answer.trim();
        if email::is_match(answer) {
            Ok(answer.to_string())
        } else {
            Err("This is not a valid email address.")
        }
    })?;
    let phone = p.until("Enter the contact's phone: ", |answer| {
        let answer = answer.trim();
        if phonenumber::is_match(answer) {
            Ok(answer.to_string())
        } else {
            Err("This is not a valid phone number.")
        }
    })?;

    book.append(&Contact { name, email, phone })?;
    p.say("\nContact added successfully!")?;
    Ok(())
}

const USER_MENU: [&str; 3] = ["view", "add", "exit"];

pub fn run_users<R: BufRead, W: Write>(p: &mut Prompter<R, W>, users: &UserFile) -> RecordResult<()> {
    if !users.initialize()? {
        p.say("File already exists, no need to initialize.")?;
    }

    loop {
        match p.menu("\nPlease select one of the following:\n", &USER_MENU)? {
            0 => view_users(p, users)?,
            1 => add_users(p, users)?,
            _ => {
                p.say("Thanks for using the program.")?;
                return Ok(());
            }
        }
    }
}

fn view_users<R: BufRead, W: Write>(p: &mut Prompter<R, W>, users: &UserFile) -> RecordResult<()> {
    let listing = match users.read() {
        Ok(listing) => listing,
        Err(RecordError::MissingFile(_)) => {
            p.say("Error: The user file does not exist. Please restart the program.")?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if listing.users.is_empty() && listing.invalid.is_empty() {
        p.say("\nThere are no users to view. Please add users before viewing.\n")?;
        return Ok(());
    }
    for user in &listing.users {
        p.say(render_user(user))?;
    }
    for line in &listing.invalid {
        p.say(format!("Invalid entry found in file: {}", line))?;
    }
    Ok(())
}

fn add_users<R: BufRead, W: Write>(p: &mut Prompter<R, W>, users: &UserFile) -> RecordResult<()> {
    let input = p.non_blank(
        "Please enter users in the format 'username email'. Separate multiple records with commas: ",
    )?;

    let (accepted, skipped) = parse_batch(&input);
    for record in &skipped {
        p.say(format!("Invalid record skipped: {}", record))?;
    }
    if accepted.is_empty() {
        p.say("No valid user entries provided.")?;
        return Ok(());
    }

    match users.append(&accepted) {
        Ok(()) => p.say("Users added successfully.")?,
        Err(RecordError::MissingFile(_)) => {
            p.say("Error: The user file does not exist. Please restart the program.")?
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
