use serde::{Deserialize, Serialize};

use crate::error::{non_negative, CalcError};
use crate::money::round_cents;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareSchedule {
    pub regular_fare: f64,
    pub rush_fare: f64,
    pub regular_rides: u32,
    pub rush_rides: u32,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            regular_fare: 1.75,
            rush_fare: 3.00,
            regular_rides: 7,
            rush_rides: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FareReport {
    pub regular_cost: f64,
    pub rush_cost: f64,
    pub monthly_total: f64,
}

pub fn bus_fare(schedule: &FareSchedule) -> Result<FareReport, CalcError> {
    let regular_fare = non_negative("regular fare", schedule.regular_fare)?;
    let rush_fare = non_negative("rush-hour fare", schedule.rush_fare)?;

    let regular_cost = round_cents(f64::from(schedule.regular_rides) * regular_fare);
    let rush_cost = round_cents(f64::from(schedule.rush_rides) * rush_fare);

    Ok(FareReport {
        regular_cost,
        rush_cost,
        monthly_total: round_cents(regular_cost + rush_cost),
    })
}
