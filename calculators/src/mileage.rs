use serde::Serialize;

use crate::error::{non_negative, CalcError};
use crate::money::round_cents;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripReport {
    pub miles_per_gallon: f64,
    pub trip_cost: f64,
}

pub fn trip(miles: f64, gallons: f64, price_per_gallon: f64) -> Result<TripReport, CalcError> {
    let miles = non_negative("miles driven", miles)?;
    let price = non_negative("price per gallon", price_per_gallon)?;
    if !gallons.is_finite() {
        return Err(CalcError::NotFinite { field: "gallons used" });
    }
    if gallons <= 0.0 {
        return Err(CalcError::NotPositive { field: "gallons used" });
    }

    Ok(TripReport {
        miles_per_gallon: miles / gallons,
        trip_cost: round_cents(gallons * price),
    })
}

pub fn render(report: &TripReport) -> String {
    format!(
        "Here are some fun facts about your trip\n{:<15} {:>10.2}\n{:<15}${:>10.2}",
        "MPG", report.miles_per_gallon, "Total cost", report.trip_cost
    )
}
