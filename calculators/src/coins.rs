use serde::Serialize;
use std::cmp::Ordering;

use crate::error::CalcError;

/// Threshold the jar is compared against, in cents.
const TEN_DOLLARS: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoinLine {
    pub coin: &'static str,
    pub count: u64,
    pub cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinSummary {
    pub lines: Vec<CoinLine>,
    pub total_cents: u64,
}

impl CoinSummary {
    pub fn verdict(&self) -> &'static str {
        match self.total_cents.cmp(&TEN_DOLLARS) {
            Ordering::Greater => "You have more than $10!",
            Ordering::Equal => "You have exactly $10!",
            Ordering::Less => "You have less than $10.",
        }
    }
}

fn coin_line(coin: &'static str, count: u64, cents_each: u64) -> Result<CoinLine, CalcError> {
    let cents = count.checked_mul(cents_each).ok_or(CalcError::TooManyCoins)?;
    Ok(CoinLine { coin, count, cents })
}

pub fn count_coins(quarters: u64, dimes: u64, nickels: u64, pennies: u64) -> Result<CoinSummary, CalcError> {
    let lines = vec![
        coin_line("Quarters", quarters, 25)?,
        coin_line("Dimes", dimes, 10)?,
        coin_line("Nickels", nickels, 5)?,
        coin_line("Pennies", pennies, 1)?,
    ];
    let total_cents = lines
        .iter()
        .try_fold(0u64, |total, line| total.checked_add(line.cents))
        .ok_or(CalcError::TooManyCoins)?;
    Ok(CoinSummary { lines, total_cents })
}

pub fn render(summary: &CoinSummary) -> String {
    let rule = "-".repeat(45);
    let mut out = format!("Coin Count Summary\n{rule}\n{:<10}{:>10}{:>15}\n{rule}\n", "Coin Type", "Count", "Value ($)");
    for line in &summary.lines {
        out.push_str(&format!(
            "{:<10}{:>10}{:>15}\n",
            line.coin,
            line.count,
            format!("{}.{:02}", line.cents / 100, line.cents % 100)
        ));
    }
    out.push_str(&format!(
        "{rule}\n{:<10}{:>10}{:>15}\n\n{}",
        "Total",
        "",
        format!("{}.{:02}", summary.total_cents / 100, summary.total_cents % 100),
        summary.verdict()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_ten_dollars() {
        let summary = count_coins(36, 9, 1, 5).unwrap();
        assert_eq!(summary.total_cents, 1_000);
        assert_eq!(summary.verdict(), "You have exactly $10!");
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(count_coins(41, 0, 0, 0).unwrap().verdict(), "You have more than $10!");
        assert_eq!(count_coins(0, 0, 0, 999).unwrap().verdict(), "You have less than $10.");
    }

    #[test]
    fn test_huge_counts_rejected() {
        assert_eq!(count_coins(1_000_000_000_000_000_000, 0, 0, 0), Err(CalcError::TooManyCoins));
        assert_eq!(count_coins(0, 0, 0, u64::MAX).map(|s| s.total_cents), Ok(u64::MAX));
        assert_eq!(count_coins(0, 0, 1, u64::MAX), Err(CalcError::TooManyCoins));
    }

    #[test]
    fn test_render_table() {
        let text = render(&count_coins(4, 3, 2, 1).unwrap());
        assert!(text.contains("Quarters           4           1.00"));
        assert!(text.contains("Total                          1.41"));
        assert!(text.ends_with("You have less than $10."));
    }
}
