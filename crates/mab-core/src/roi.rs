//! ROI Engine
//!
//! Converts headcount, hours saved and salary into labour savings.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Paid hours in a working year (52 weeks x 40 hours)
pub const WORK_HOURS_PER_YEAR: Decimal = dec!(2080);

/// Weeks used to annualise weekly savings
pub const WEEKS_PER_YEAR: Decimal = dec!(52);

/// Benchmark efficiency gain reported alongside every result, in percent.
/// Not derived from the inputs.
pub const EFFICIENCY_BOOST: u32 = 42;

/// Derived savings figures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    /// Savings per week in USD
    pub weekly: Decimal,

    /// Savings per year in USD (`weekly * 52`)
    pub annual: Decimal,

    /// Benchmark efficiency gain, always [`EFFICIENCY_BOOST`]
    pub efficiency_boost: u32,
}

/// Compute weekly and annual savings.
///
/// `hourly = avg_salary / 2080`, `weekly = employees * hours_saved * hourly`,
/// `annual = weekly * 52`. Callers are expected to keep inputs non-negative;
/// the function itself never fails.
pub fn calculate_roi(employees: u32, hours_saved: Decimal, avg_salary: Decimal) -> RoiResult {
    let hourly_rate = avg_salary / WORK_HOURS_PER_YEAR;
    let weekly = Decimal::from(employees) * hours_saved * hourly_rate;
    let annual = weekly * WEEKS_PER_YEAR;

    RoiResult {
        weekly,
        annual,
        efficiency_boost: EFFICIENCY_BOOST,
    }
}
