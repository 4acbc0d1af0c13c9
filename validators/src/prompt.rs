//! Line-based prompting with reprompt loops.
//!
//! Every interactive program in the workspace talks to the user through a
//! [`Prompter`], which owns its input and output so sessions can be driven
//! from in-memory buffers in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use tracing::debug;

use crate::error::PromptError;

pub type PromptResult<T> = Result<T, PromptError>;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// A prompter over the locked process stdin and stdout.
pub fn stdio() -> Prompter<StdinLock<'static>, Stdout> {
    let stdin: Stdin = io::stdin();
    Prompter::new(stdin.lock(), io::stdout())
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> PromptResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line terminator.
    pub fn line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Closed);
        }
        let answer = buf.trim_end_matches(['\r', '\n']).to_string();
        debug!(prompt, answer = %answer, "read line");
        Ok(answer)
    }

    /// Asks until `parse` accepts the answer, printing its complaint each time.
    pub fn until<T, E, F>(&mut self, prompt: &str, mut parse: F) -> PromptResult<T>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: Display,
    {
        loop {
            let answer = self.line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(complaint) => self.say(complaint)?,
            }
        }
    }

    pub fn non_blank(&mut self, prompt: &str) -> PromptResult<String> {
        self.until(prompt, |answer| {
            let answer = answer.trim();
            if answer.is_empty() {
                Err("The input cannot be blank or only spaces. Please try again.")
            } else {
                Ok(answer.to_string())
            }
        })
    }

    /// Accepts y/yes/n/no in any case.
    pub fn yes_no(&mut self, prompt: &str) -> PromptResult<bool> {
        self.until(prompt, |answer| match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err("Please respond with 'yes' or 'no'."),
        })
    }

    /// The "would you like to go again?" question; only y or n is accepted.
    pub fn again(&mut self, prompt: &str) -> PromptResult<bool> {
        self.until(prompt, |answer| match answer.trim().to_lowercase().as_str() {
            "y" => Ok(true),
            "n" => Ok(false),
            _ => Err("Invalid input. Please enter 'y' for yes or 'n' for no."),
        })
    }

    /// Shows a numbered menu and returns the index of the chosen option.
    /// The user may type the number or the option text.
    pub fn menu<S: AsRef<str>>(&mut self, heading: &str, options: &[S]) -> PromptResult<usize> {
        let mut listing = String::from(heading);
        for (i, option) in options.iter().enumerate() {
            listing.push_str(&format!("{}. {}\n", i + 1, option.as_ref()));
        }

        self.until(&listing, |answer| {
            let answer = answer.trim();
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    return Ok(n - 1);
                }
            }
            options
                .iter()
                .position(|option| option.as_ref().eq_ignore_ascii_case(answer))
                .ok_or_else(|| format!("'{}' is not a valid choice.", answer))
        })
    }

    pub fn integer_at_least(&mut self, prompt: &str, min: i64) -> PromptResult<i64> {
        self.until(prompt, |answer| match answer.trim().parse::<i64>() {
            Ok(n) if n >= min => Ok(n),
            Ok(_) => Err(format!("Number must be at minimum {}.", min)),
            Err(_) => Err(format!("'{}' is not an integer.", answer.trim())),
        })
    }

    /// A count of things: digits only, zero allowed.
    pub fn whole_number(&mut self, prompt: &str) -> PromptResult<u64> {
        self.until(prompt, |answer| {
            let answer = answer.trim();
            if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
                return Err("Error: Please enter a whole number greater than or equal to 0.");
            }
            answer
                .parse::<u64>()
                .map_err(|_| "Error: That number is too large.")
        })
    }

    /// A non-negative decimal amount such as a price or a distance.
    pub fn amount(&mut self, prompt: &str) -> PromptResult<f64> {
        self.until(prompt, |answer| match answer.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
            Ok(_) => Err("Amount cannot be negative. Please try again."),
            Err(_) => Err("Invalid input. Please enter a valid number."),
        })
    }
}
