//! Capitalization and phrase clean-up shared by the validation programs.

use thiserror::Error;

/// Words kept lowercase inside a title unless they open or close it.
const MINOR_TITLE_WORDS: [&str; 4] = ["the", "a", "an", "of"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleIssue {
    #[error("The title cannot be blank or only spaces.")]
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackIssue {
    #[error("The input cannot be blank or only spaces.")]
    Blank,
    #[error("Feedback should not contain numbers. Please enter only text phrases.")]
    ContainsDigits,
    #[error("Each phrase must end in an exclamation point.")]
    MissingExclamation,
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Raises every letter that opens a word or follows a non-letter and lowers
/// the others: `anne-marie o'connor` becomes `Anne-Marie O'Connor`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }

    out
}

/// Collapses spacing and applies book-title capitalization.
pub fn correct_title(title: &str) -> Result<String, TitleIssue> {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.is_empty() {
        return Err(TitleIssue::Blank);
    }

    let last = words.len() - 1;
    let corrected: Vec<String> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i != 0 && i != last && MINOR_TITLE_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(word)
            }
        })
        .collect();

    Ok(corrected.join(" "))
}

pub fn check_feedback(raw: &str) -> Result<&str, FeedbackIssue> {
    let feedback = raw.trim();
    if feedback.is_empty() {
        return Err(FeedbackIssue::Blank);
    }
    if feedback.chars().any(|c| c.is_ascii_digit()) {
        return Err(FeedbackIssue::ContainsDigits);
    }
    if !feedback.contains('!') {
        return Err(FeedbackIssue::MissingExclamation);
    }
    Ok(feedback)
}

/// Splits on `!`, drops empty phrases, and re-terminates each phrase.
pub fn split_feedback(feedback: &str) -> Vec<String> {
    feedback
        .split('!')
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .map(|phrase| format!("{}!", capitalize(phrase)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("smith", "Smith")]
    #[case("SMITH", "Smith")]
    #[case("m.", "M.")]
    #[case("", "")]
    #[case("great job", "Great job")]
    fn test_capitalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }

    #[rstest]
    #[case("o'connor", "O'Connor")]
    #[case("anne-marie", "Anne-Marie")]
    #[case("python primer", "Python Primer")]
    #[case("DEEP learning DIVE", "Deep Learning Dive")]
    #[case("m.", "M.")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[rstest]
    #[case("the lord of the rings", "The Lord of the Rings")]
    #[case("  a   tale of two   cities ", "A Tale of Two Cities")]
    #[case("OF MICE AND THE", "Of Mice And The")]
    #[case("dune", "Dune")]
    fn test_correct_title(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(correct_title(input).unwrap(), expected);
    }

    #[test]
    fn test_blank_title_rejected() {
        assert_eq!(correct_title("   "), Err(TitleIssue::Blank));
    }

    #[test]
    fn test_feedback_checks() {
        assert_eq!(check_feedback("  "), Err(FeedbackIssue::Blank));
        assert_eq!(check_feedback("top 10 class!"), Err(FeedbackIssue::ContainsDigits));
        assert_eq!(check_feedback("great class"), Err(FeedbackIssue::MissingExclamation));
        assert_eq!(check_feedback(" great class! "), Ok("great class!"));
    }

    #[test]
    fn test_split_feedback() {
        let phrases = split_feedback("great class!  loved the LABS!! !more please");
        assert_eq!(phrases, vec!["Great class!", "Loved the labs!", "More please!"]);
    }
}
