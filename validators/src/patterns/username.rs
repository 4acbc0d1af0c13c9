use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // A single run of visible characters; '@' belongs to the email column
    static ref USERNAME_PATTERN: Regex = Regex::new(
        r"^[^\s@]{1,64}$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    USERNAME_PATTERN.is_match(value)
}

pub struct UsernameMatcher {}

impl PatternMatcher for UsernameMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }

    fn normalize(&self, value: &str) -> Option<String> {
        is_match(value).then(|| value.to_lowercase())
    }
}
