use serde::Serialize;

use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub score: u8,
    pub letter: Letter,
}

impl Grade {
    pub fn advice(&self) -> &'static str {
        match self.letter {
            Letter::A => "Perfect",
            Letter::B => "Excellent, you rocked it, keep it up",
            Letter::C => "Great, but there are some improvements need to made. Keep practicing",
            Letter::D => "You may need more practice then most, we suggest you coming to instructor's office hours",
            Letter::F => "Reflect on areas that you missed. Practice more and go to office hours",
        }
    }
}

/// Parses a typed quiz score and grades it on a 90/80/70/60 scale.
pub fn letter_grade(raw: &str) -> Result<Grade, CalcError> {
    let raw = raw.trim();
    if raw.contains('.') {
        return Err(CalcError::NotWhole);
    }

    let score: i64 = match raw.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            return Err(CalcError::ScoreTooLow);
        }
        _ if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) => {
            raw.parse().map_err(|_| CalcError::ScoreTooHigh)?
        }
        _ => return Err(CalcError::NotInteger),
    };

    if score > 100 {
        return Err(CalcError::ScoreTooHigh);
    }

    let letter = match score {
        90..=100 => Letter::A,
        80..=89 => Letter::B,
        70..=79 => Letter::C,
        60..=69 => Letter::D,
        _ => Letter::F,
    };

    Ok(Grade { score: score as u8, letter })
}
