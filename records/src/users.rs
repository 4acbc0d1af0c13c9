//! Plain-text user file: one `username email` record per line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use regex_validator::patterns::{email, username};

use crate::error::{RecordError, RecordResult};

pub const DEFAULT_USERNAME: &str = "lmcgrone";
pub const DEFAULT_EMAIL: &str = "lmcgrone@minnstate.edu";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
}

impl UserRecord {
    /// Parses `username email`, separated by exactly one space.
    pub fn parse(record: &str) -> Option<Self> {
        let parts: Vec<&str> = record.split(' ').collect();
        match parts.as_slice() {
            [user, mail] if username::is_match(user) && email::is_match(mail) => Some(Self {
                username: user.to_string(),
                email: mail.to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.username, self.email)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserListing {
    pub users: Vec<UserRecord>,
    /// Non-blank lines that are not a valid record.
    pub invalid: Vec<String>,
}

/// Splits comma-separated `username email` records into accepted and skipped ones.
pub fn parse_batch(input: &str) -> (Vec<UserRecord>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut skipped = Vec::new();

    for record in input.split(',').map(str::trim).filter(|r| !r.is_empty()) {
        match UserRecord::parse(record) {
            Some(user) => accepted.push(user),
            None => skipped.push(record.to_string()),
        }
    }

    (accepted, skipped)
}

#[derive(Debug, Clone)]
pub struct UserFile {
    path: PathBuf,
}

impl UserFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file holding the default record. Returns `false` and
    /// leaves the file alone when it already exists.
    pub fn initialize(&self) -> RecordResult<bool> {
        match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(mut file) => {
                writeln!(file, "{} {}", DEFAULT_USERNAME, DEFAULT_EMAIL)?;
                info!(path = %self.path.display(), "user file created");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %self.path.display(), "user file already exists");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn read(&self) -> RecordResult<UserListing> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.not_found_as_missing(e))?;

        let mut listing = UserListing::default();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match UserRecord::parse(line) {
                Some(user) => listing.users.push(user),
                None => {
                    warn!(line, "invalid entry in user file");
                    listing.invalid.push(line.to_string());
                }
            }
        }
        Ok(listing)
    }

    /// Appends records to an existing file.
    pub fn append(&self, users: &[UserRecord]) -> RecordResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.not_found_as_missing(e))?;

        for user in users {
            writeln!(file, "{}", user)?;
        }
        info!(path = %self.path.display(), count = users.len(), "users added");
        Ok(())
    }

    fn not_found_as_missing(&self, e: std::io::Error) -> RecordError {
        if e.kind() == ErrorKind::NotFound {
            RecordError::MissingFile(self.path.clone())
        } else {
            RecordError::Io(e)
        }
    }
}

pub fn render_user(user: &UserRecord) -> String {
    format!("Username: {:<15} Email:{:>30}", user.username, user.email)
}
