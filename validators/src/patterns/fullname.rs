use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;
use crate::text::title_case;

lazy_static! {
    // First [Middle|Initial] Last, each name part allowing one internal apostrophe or hyphen
    static ref FULLNAME_PATTERN: Regex = Regex::new(
        r"^[A-Za-z]+(?:[-'][A-Za-z]+)? (?:[A-Za-z]\.|[A-Za-z]+(?:[-'][A-Za-z]+)?) [A-Za-z]+(?:[-'][A-Za-z]+)?$"
    ).unwrap();
}

/// Outcome of a full-name check. A mismatch is an ordinary value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(String),
    Invalid,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The normalized name, if the input was valid.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid(name) => Some(name),
            ValidationResult::Invalid => None,
        }
    }
}

/// Trims and lowercases raw prompt input before it is handed to [`validate`].
pub fn prepare_name_input(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_match(value: &str) -> bool {
    FULLNAME_PATTERN.is_match(value)
}

/// Checks `raw` against the "First Middle Last" layout and renders the
/// capitalized form on success.
///
/// Each token is capitalized on its own and every letter after an apostrophe
/// or hyphen is raised as well, so `o'connor` becomes `O'Connor` and an
/// initial like `m.` becomes `M.`.
pub fn validate(raw: &str) -> ValidationResult {
    if !is_match(raw) {
        return ValidationResult::Invalid;
    }

    let normalized = raw
        .split(' ')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    ValidationResult::Valid(normalized)
}

pub struct FullNameMatcher {}

impl PatternMatcher for FullNameMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn normalize(&self, value: &str) -> Option<String> {
        match validate(value) {
            ValidationResult::Valid(name) => Some(name),
            ValidationResult::Invalid => None,
        }
    }
}
