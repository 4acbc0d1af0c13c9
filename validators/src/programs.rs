//! The interactive validation programs: full name, number, book title and
//! feedback phrases. Each one is a single round wrapped in [`run_session`].

use std::io::{BufRead, Write};

use tracing::info;

use crate::error::PromptError;
use crate::patterns::{float, fullname};
use crate::prompt::{PromptResult, Prompter};
use crate::text::{check_feedback, correct_title, split_feedback};
use crate::ValidationResult;

/// Runs `round` until the user declines another go.
pub fn run_session<R, W, F>(
    p: &mut Prompter<R, W>,
    welcome: &str,
    again_prompt: &str,
    farewell: &str,
    mut round: F,
) -> PromptResult<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Prompter<R, W>) -> PromptResult<()>,
{
    p.say(welcome)?;
    loop {
        round(p)?;
        if !p.again(again_prompt)? {
            p.say(farewell)?;
            return Ok(());
        }
        p.say("\nRestarting the program...\n")?;
    }
}

/// Treats running out of input as a normal end of the session.
pub fn end_of_input_is_ok(result: PromptResult<()>) -> PromptResult<()> {
    match result {
        Err(PromptError::Closed) => {
            info!("input closed, ending session");
            Ok(())
        }
        other => other,
    }
}

pub fn name_round<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    let raw = p.line("Please enter a full name (format: 'First Middle Last'): ")?;
    match fullname::validate(&fullname::prepare_name_input(&raw)) {
        ValidationResult::Valid(name) => {
            p.say(format!("The name '{}' looks like a valid full name.", name))
        }
        ValidationResult::Invalid => p.say(
            "The input does not look like a valid full name. Please enter in 'First Middle Last' format.",
        ),
    }
}

pub fn float_round<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    let number = p.line("Enter a number. Negatives and decimals are allowed: ")?;
    if float::is_match(&number) {
        p.say(format!("{} is a valid number!", number))
    } else {
        p.say("This does not look like a valid number.")
    }
}

pub fn title_round<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    let corrected = p.until("Please enter a title for validation & correction: ", correct_title)?;
    p.say(format!("The corrected title is: {}\n", corrected))
}

pub fn feedback_round<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    let feedback = p.until(
        "Please enter multiple feedback phrases, each ending in an exclamation point: ",
        |raw| check_feedback(raw).map(str::to_string),
    )?;

    p.say("\nHere are your feedback phrases:")?;
    for (idx, phrase) in split_feedback(&feedback).iter().enumerate() {
        p.say(format!("{}: {}", idx + 1, phrase))?;
    }
    p.say("")
}

pub fn run_name<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    run_session(
        p,
        "Welcome to the full name validation program.",
        "\nWould you like to validate another name? (y/n): ",
        "Thanks for using the program!",
        name_round,
    )
}

pub fn run_float<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    run_session(
        p,
        "Welcome to the float validation program.",
        "\nWould you like to validate another number? (y/n): ",
        "Thanks for using the program!",
        float_round,
    )
}

pub fn run_title<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    run_session(
        p,
        "Welcome to the title validation program.",
        "\nWould you like to validate another title? (y/n): ",
        "Thanks for using the program!",
        title_round,
    )
}

pub fn run_feedback<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    run_session(
        p,
        "Welcome to the feedback generator.",
        "\nWould you like to try again? Enter y or n: ",
        "Thanks for helping us build our feedback library.",
        feedback_round,
    )
}
