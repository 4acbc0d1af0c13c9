//! Contact book stored as a CSV file with a `Name,Email,Phone` header.

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{RecordError, RecordResult};

pub const HEADER: [&str; 3] = ["Name", "Email", "Phone"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct ContactFile {
    path: PathBuf,
}

impl ContactFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved contacts, or `None` when the file has not been created yet.
    pub fn read(&self) -> RecordResult<Option<Vec<Contact>>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut rows = split_records(&text).into_iter();
        let Some((header_line, columns)) = rows.next() else {
            return Ok(Some(Vec::new()));
        };

        let column = |name: &str| columns.iter().position(|c| c.trim() == name);
        let (Some(name_at), Some(email_at), Some(phone_at)) =
            (column(HEADER[0]), column(HEADER[1]), column(HEADER[2]))
        else {
            return Err(self.malformed(header_line, format!("expected header {}", HEADER.join(","))));
        };

        let mut contacts = Vec::new();
        for (line, fields) in rows {
            let field = |at: usize| fields.get(at).cloned();
            match (field(name_at), field(email_at), field(phone_at)) {
                (Some(name), Some(email), Some(phone)) => contacts.push(Contact { name, email, phone }),
                _ => {
                    return Err(self.malformed(
                        line,
                        format!("expected {} fields, found {}", HEADER.len(), fields.len()),
                    ))
                }
            }
        }

        debug!(path = %self.path.display(), count = contacts.len(), "read contacts");
        Ok(Some(contacts))
    }

    /// Appends one contact, writing the header first if the file is new.
    pub fn append(&self, contact: &Contact) -> RecordResult<()> {
        let is_new = !self.path.exists();
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;

        if is_new {
            writeln!(file, "{}", HEADER.join(","))?;
        }
        writeln!(
            file,
            "{}",
            encode_record(&[&contact.name, &contact.email, &contact.phone])
        )?;

        info!(path = %self.path.display(), name = %contact.name, "contact added");
        Ok(())
    }

    fn malformed(&self, line: usize, reason: String) -> RecordError {
        RecordError::Malformed {
            path: self.path.clone(),
            line,
            reason,
        }
    }
}

pub fn render_contacts(contacts: &[Contact]) -> String {
    let mut out = format!("{:<24}{:<32}{}\n", HEADER[0], HEADER[1], HEADER[2]);
    out.push_str(&"-".repeat(70));
    out.push('\n');
    for contact in contacts {
        out.push_str(&format!("{:<24}{:<32}{}\n", contact.name, contact.email, contact.phone));
    }
    out
}

/// Quotes a field only when it holds a comma, a quote or a line break.
fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn encode_record(fields: &[&str]) -> String {
    fields.iter().map(|f| encode_field(f)).collect::<Vec<_>>().join(",")
}

/// Splits CSV text into records. Double-quoted fields may hold commas,
/// `""` escapes and line breaks. Each record carries the line it starts on;
/// blank lines are skipped.
fn split_records(text: &str) -> Vec<(usize, Vec<String>)> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    // a quote or a comma makes the record count even if every field is empty
    let mut marked = false;
    let mut line = 1;
    let mut start = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => {
                quoted = !quoted;
                marked = true;
            }
            '\n' if quoted => {
                current.push(c);
                line += 1;
            }
            '\r' if !quoted => {}
            ',' if !quoted => {
                fields.push(std::mem::take(&mut current));
                marked = true;
            }
            '\n' => {
                fields.push(std::mem::take(&mut current));
                if marked || fields.iter().any(|f| !f.trim().is_empty()) {
                    records.push((start, std::mem::take(&mut fields)));
                } else {
                    fields.clear();
                }
                marked = false;
                line += 1;
                start = line;
            }
            _ => current.push(c),
        }
    }

    if marked || !current.trim().is_empty() {
        fields.push(current);
        records.push((start, fields));
    }
    records
}
