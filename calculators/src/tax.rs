use serde::Serialize;

use crate::error::{non_negative, CalcError};
use crate::money::round_cents;

pub const STATE_RATE: f64 = 0.05;
pub const COUNTY_RATE: f64 = 0.025;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxReport {
    pub po_amount: f64,
    pub state_tax: f64,
    pub county_tax: f64,
    pub total: f64,
}

/// State and county sales tax on a purchase order, each rounded to cents.
pub fn sales_tax(amount: f64) -> Result<TaxReport, CalcError> {
    let po_amount = non_negative("purchase order amount", amount)?;
    let state_tax = round_cents(po_amount * STATE_RATE);
    let county_tax = round_cents(po_amount * COUNTY_RATE);

    Ok(TaxReport {
        po_amount,
        state_tax,
        county_tax,
        total: round_cents(po_amount + state_tax + county_tax),
    })
}

pub fn render(report: &TaxReport) -> String {
    [
        ("PO Amount", report.po_amount),
        ("State Tax", report.state_tax),
        ("County Tax", report.county_tax),
        ("Total", report.total),
    ]
    .iter()
    .map(|(label, amount)| format!("{:<17}$ {:>12.2}", label, amount))
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, 5.0, 2.5, 107.5)]
    #[case(19.99, 1.0, 0.5, 21.49)]
    #[case(0.0, 0.0, 0.0, 0.0)]
    fn test_sales_tax(#[case] amount: f64, #[case] state: f64, #[case] county: f64, #[case] total: f64) {
        let report = sales_tax(amount).unwrap();
        assert_eq!(report.state_tax, state);
        assert_eq!(report.county_tax, county);
        assert_eq!(report.total, total);
    }

    #[test]
    fn test_negative_rejected() {
        assert!(sales_tax(-0.01).is_err());
    }

    #[test]
    fn test_render_aligns_labels() {
        let text = render(&sales_tax(100.0).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("Total            $"));
        assert!(lines[3].ends_with("107.50"));
    }
}
