use regex::Regex;
use lazy_static::lazy_static;
use super::PatternMatcher;

lazy_static! {
    // Optional minus, digits, optional fraction with at least one digit
    static ref FLOAT_PATTERN: Regex = Regex::new(
        r"^-?[0-9]+(?:\.[0-9]+)?$"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    FLOAT_PATTERN.is_match(value)
}

pub struct FloatMatcher {}

impl PatternMatcher for FloatMatcher {
    fn matches(&self, value: &str) -> bool {
        is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        let valid_numbers = vec![
            "0",
            "456",
            "-123",
            "0.99",
            "-123.456",
            "007",
        ];

        for number in valid_numbers {
            assert!(is_match(number), "Number should be valid: {}", number);
        }
    }

    #[test]
    fn test_invalid_numbers() {
        let invalid_numbers = vec![
            "",
            "1.2.3",    // two decimal points
            "12a",      // letters
            ".5",       // no leading digit
            "5.",       // no trailing digit
            "--5",      // doubled sign
            "+5",       // plus sign
            " 5",       // whitespace
            "1,000",    // grouping
        ];

        for number in invalid_numbers {
            assert!(!is_match(number), "Number should be invalid: {:?}", number);
        }
    }
}
