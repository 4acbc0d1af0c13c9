pub mod error;
pub mod findings;
pub mod patterns;
pub mod prompt;
pub mod programs;
pub mod text;

pub use error::PromptError;
pub use patterns::fullname::{prepare_name_input, validate, ValidationResult};
pub use prompt::Prompter;

use patterns::PatternMatcher;
use std::collections::HashMap;

/// Names of every pattern that accepts `value`, in a fixed order.
pub fn identify(value: &str) -> Vec<String> {
    if value.is_empty() {
        return vec![];
    }

    let mut matches = Vec::new();

    if patterns::email::is_match(value) {
        matches.push("email".to_string());
    }
    if patterns::float::is_match(value) {
        matches.push("float".to_string());
    }
    if patterns::fullname::is_match(value) {
        matches.push("fullname".to_string());
    }
    if patterns::phonenumber::is_match(value) {
        matches.push("phonenumber".to_string());
    }
    if patterns::username::is_match(value) {
        matches.push("username".to_string());
    }

    matches
}

pub fn get_all_matchers() -> HashMap<String, Box<dyn PatternMatcher>> {
    let mut matchers: HashMap<String, Box<dyn PatternMatcher>> = HashMap::new();

    matchers.insert("email".to_string(), Box::new(patterns::email::EmailMatcher {}));
    matchers.insert("float".to_string(), Box::new(patterns::float::FloatMatcher {}));
    matchers.insert("fullname".to_string(), Box::new(patterns::fullname::FullNameMatcher {}));
    matchers.insert("phonenumber".to_string(), Box::new(patterns::phonenumber::PhoneNumberMatcher {}));
    matchers.insert("username".to_string(), Box::new(patterns::username::UsernameMatcher {}));

    matchers
}
