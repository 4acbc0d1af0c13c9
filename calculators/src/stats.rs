//! Count, total and average of the whole numbers in a text file.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{CalcError, RunError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberStats {
    pub count: u64,
    pub total: u64,
    pub average: f64,
}

/// Lines holding only digits count; every other line is skipped.
pub fn summarize(text: &str) -> Result<NumberStats, CalcError> {
    let mut count = 0u64;
    let mut total = 0u64;

    for line in text.lines().map(str::trim) {
        if line.is_empty() || !line.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let value: u64 = line.parse().map_err(|_| CalcError::TotalTooLarge)?;
        total = total.checked_add(value).ok_or(CalcError::TotalTooLarge)?;
        count += 1;
    }

    if count == 0 {
        return Err(CalcError::NoNumbers);
    }
    Ok(NumberStats {
        count,
        total,
        average: total as f64 / count as f64,
    })
}

pub fn render(stats: &NumberStats) -> String {
    format!(
        "{:-^40}\n{:<20}{:>15}\n{:<20}{:>15}\n{:<20}{:>15.2}\n",
        "Summary of Results",
        "Count of Integers:",
        stats.count,
        "Total Sum:",
        stats.total,
        "Average:",
        stats.average
    )
}

/// Reads `input`, writes the summary table to `output` and returns the figures.
pub fn summarize_file(input: &Path, output: &Path) -> Result<NumberStats, RunError> {
    let text = fs::read_to_string(input)?;
    let stats = summarize(&text)?;
    debug!(path = %input.display(), count = stats.count, "numbers read");

    fs::write(output, render(&stats))?;
    info!(path = %output.display(), "summary written");
    Ok(stats)
}
