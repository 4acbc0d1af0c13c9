use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Phone number patterns for various formats
    static ref PHONE_PATTERN: Regex = Regex::new(
        r"^(?:(?:\+\d{1,3}[-. ]?)?(?:\(\d{1,4}\)|\d{1,4})[-. ]?\d{1,4}[-. ]?\d{1,4}(?:[-. ]?\d{1,4})?)$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    // Local numbers need at least seven digits
    value.chars().filter(char::is_ascii_digit).count() >= 7 && PHONE_PATTERN.is_match(value)
}

pub struct PhoneNumberMatcher {}

impl PatternMatcher for PhoneNumberMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}
