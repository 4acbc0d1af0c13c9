use std::io;
use thiserror::Error;

use regex_validator::PromptError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("That is too many coins to count.")]
    TooManyCoins,

    #[error("The file contains no whole numbers.")]
    NoNumbers,

    #[error("The numbers in the file add up to more than can be counted.")]
    TotalTooLarge,

    #[error("Error: Please enter a whole number, not a decimal or float.")]
    NotWhole,

    #[error("Error: Please enter a valid integer, not words or special characters.")]
    NotInteger,

    #[error("Input Error: Score cannot be higher than 100.")]
    ScoreTooHigh,

    #[error("Input Error: Score cannot be less than 0.")]
    ScoreTooLow,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("could not render report: {0}")]
    Render(#[from] serde_json::Error),
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if !value.is_finite() {
        Err(CalcError::NotFinite { field })
    } else if value < 0.0 {
        Err(CalcError::Negative { field, value })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(f64::NAN)]
    fn test_non_finite_rejected(#[case] value: f64) {
        assert_eq!(non_negative("amount", value), Err(CalcError::NotFinite { field: "amount" }));
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("amount", 0.0), Ok(0.0));
        assert!(matches!(non_negative("amount", -0.5), Err(CalcError::Negative { .. })));
    }
}
