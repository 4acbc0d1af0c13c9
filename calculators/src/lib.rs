pub mod coins;
pub mod error;
pub mod fares;
pub mod grade;
pub mod mileage;
pub mod money;
pub mod stats;
pub mod tax;
pub mod wage;

pub use error::{CalcError, RunError};
