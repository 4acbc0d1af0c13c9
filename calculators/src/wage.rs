use serde::Serialize;

use crate::error::{non_negative, CalcError};
use crate::money::round_cents;

pub const OVERTIME_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Paycheck {
    pub regular_pay: f64,
    pub overtime_pay: f64,
    pub gross_pay: f64,
    pub total_hours: f64,
}

pub fn gross_pay(rate: f64, regular_hours: f64, overtime_hours: f64) -> Result<Paycheck, CalcError> {
    let rate = non_negative("hourly rate", rate)?;
    let regular_hours = non_negative("regular hours", regular_hours)?;
    let overtime_hours = non_negative("overtime hours", overtime_hours)?;

    let regular_pay = round_cents(regular_hours * rate);
    let overtime_pay = round_cents(overtime_hours * rate * OVERTIME_MULTIPLIER);

    Ok(Paycheck {
        regular_pay,
        overtime_pay,
        gross_pay: round_cents(regular_pay + overtime_pay),
        total_hours: regular_hours + overtime_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overtime_week() {
        let pay = gross_pay(15.34, 40.0, 10.0).unwrap();
        assert_eq!(pay.regular_pay, 613.6);
        assert_eq!(pay.overtime_pay, 230.1);
        assert_eq!(pay.gross_pay, 843.7);
        assert_eq!(pay.total_hours, 50.0);
    }

    #[test]
    fn test_negative_hours_rejected() {
        assert!(gross_pay(15.0, -1.0, 0.0).is_err());
    }
}
