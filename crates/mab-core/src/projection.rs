//! ROI Projection
//!
//! Chart data for the interactive calculator: a 12-month cumulative savings
//! timeline and an as-is vs optimized comparison.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::roi::{calculate_roi, RoiResult, WEEKS_PER_YEAR};

/// Months shown on the timeline chart
pub const PROJECTION_MONTHS: u32 = 12;

/// Bounds of a calculator slider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SliderRange {
    pub const EMPLOYEES: Self = Self { min: 1, max: 100, step: 1 };
    pub const AVG_SALARY: Self = Self { min: 30_000, max: 200_000, step: 5_000 };
    pub const HOURS_SAVED: Self = Self { min: 0, max: 80, step: 5 };
    pub const SOFTWARE_OVERHEAD: Self = Self { min: 0, max: 50_000, step: 1_000 };

    /// Clamp into range and snap to the nearest step
    pub fn snap(&self, value: u32) -> u32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 1 {
            return clamped;
        }

        let offset = clamped - self.min;
        let steps = (offset + self.step / 2) / self.step;
        (self.min + steps * self.step).min(self.max)
    }
}

/// Calculator inputs, as set by the sliders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiScenario {
    pub employees: u32,
    pub avg_salary: u32,
    pub hours_saved_per_week: u32,
    /// Annual software cost of the automation
    pub software_overhead: u32,
}

impl Default for RoiScenario {
    fn default() -> Self {
        Self {
            employees: 10,
            avg_salary: 75_000,
            hours_saved_per_week: 20,
            software_overhead: 5_000,
        }
    }
}

impl RoiScenario {
    /// Snap every field into its slider range
    pub fn clamped(self) -> Self {
        Self {
            employees: SliderRange::EMPLOYEES.snap(self.employees),
            avg_salary: SliderRange::AVG_SALARY.snap(self.avg_salary),
            hours_saved_per_week: SliderRange::HOURS_SAVED.snap(self.hours_saved_per_week),
            software_overhead: SliderRange::SOFTWARE_OVERHEAD.snap(self.software_overhead),
        }
    }

    pub fn result(&self) -> RoiResult {
        calculate_roi(
            self.employees,
            Decimal::from(self.hours_saved_per_week),
            Decimal::from(self.avg_salary),
        )
    }

    pub fn projection(&self) -> RoiProjection {
        RoiProjection::build(self)
    }
}

/// One month on the cumulative savings chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub month: u32,
    pub label: String,
    /// Cumulative savings net of overhead, rounded to whole dollars
    pub savings: Decimal,
    /// Cumulative savings once non-negative, zero before break-even
    pub break_even: Decimal,
}

/// One category on the comparison chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub category: String,
    pub as_is: Decimal,
    pub optimized: Decimal,
}

/// Everything the calculator view renders
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub result: RoiResult,
    /// Annual savings minus software overhead
    pub net_annual: Decimal,
    pub timeline: Vec<TimelinePoint>,
    pub comparison: Vec<ComparisonRow>,
}

impl RoiProjection {
    pub fn build(scenario: &RoiScenario) -> Self {
        let result = scenario.result();
        let overhead = Decimal::from(scenario.software_overhead);
        let labor_cost = Decimal::from(scenario.employees) * Decimal::from(scenario.avg_salary);

        let timeline = (1..=PROJECTION_MONTHS)
            .map(|month| {
                let cumulative = cumulative_savings(&result, overhead, month);
                TimelinePoint {
                    month,
                    label: format!("Month {month}"),
                    savings: round_half_up(cumulative),
                    break_even: if cumulative >= Decimal::ZERO { cumulative } else { Decimal::ZERO },
                }
            })
            .collect();

        let comparison = vec![
            ComparisonRow {
                category: "Annual Labor Cost".into(),
                as_is: round_half_up(labor_cost),
                optimized: round_half_up(labor_cost - result.annual),
            },
            ComparisonRow {
                category: "Time Spent on Tasks".into(),
                as_is: round_half_up(Decimal::from(scenario.hours_saved_per_week) * WEEKS_PER_YEAR),
                optimized: Decimal::ZERO,
            },
            ComparisonRow {
                category: "Software Overhead".into(),
                as_is: Decimal::ZERO,
                optimized: overhead,
            },
        ];

        Self {
            result,
            net_annual: result.annual - overhead,
            timeline,
            comparison,
        }
    }

    /// First month whose cumulative savings cover the overhead.
    ///
    /// Compares exact amounts; the rounded chart values can reach zero a
    /// month early.
    pub fn break_even_month(&self) -> Option<u32> {
        let overhead = self.result.annual - self.net_annual;
        (1..=PROJECTION_MONTHS)
            .find(|&month| cumulative_savings(&self.result, overhead, month) >= Decimal::ZERO)
    }
}

/// Savings through `month`, net of overhead. 4 weeks per month, overhead paid up front.
fn cumulative_savings(result: &RoiResult, overhead: Decimal, month: u32) -> Decimal {
    result.weekly * dec!(4) * Decimal::from(month) - overhead
}

/// Round to a whole number with halves going toward positive infinity
fn round_half_up(value: Decimal) -> Decimal {
    (value + dec!(0.5)).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::EFFICIENCY_BOOST;

    #[test]
    fn test_default_projection() {
        let projection = RoiScenario::default().projection();

        assert_eq!(projection.result.annual.round_dp(2), dec!(375000.00));
        assert_eq!(projection.net_annual.round_dp(2), dec!(370000.00));
        assert_eq!(projection.timeline.len(), 12);

        // 7211.54 * 4 - 5000 = 23846.15...
        let first = &projection.timeline[0];
        assert_eq!(first.label, "Month 1");
        assert_eq!(first.savings, dec!(23846));
        assert_eq!(first.break_even.round_dp(2), dec!(23846.15));
        assert_eq!(projection.break_even_month(), Some(1));
    }

    #[test]
    fn test_break_even_zero_before_recovery() {
        let scenario = RoiScenario {
            employees: 1,
            avg_salary: 30_000,
            hours_saved_per_week: 5,
            software_overhead: 50_000,
        };
        let projection = scenario.projection();

        assert!(projection.timeline[0].savings < Decimal::ZERO);
        assert_eq!(projection.timeline[0].break_even, Decimal::ZERO);
        assert_eq!(projection.break_even_month(), None);
        assert!(projection.net_annual < Decimal::ZERO);
    }

    #[test]
    fn test_break_even_ignores_rounding() {
        // Month 1 is -0.4 short, which the chart rounds to 0
        let weekly = dec!(1249.9);
        let annual = weekly * WEEKS_PER_YEAR;
        let projection = RoiProjection {
            result: RoiResult { weekly, annual, efficiency_boost: EFFICIENCY_BOOST },
            net_annual: annual - dec!(5000),
            timeline: Vec::new(),
            comparison: Vec::new(),
        };

        assert_eq!(projection.break_even_month(), Some(2));
    }

    #[test]
    fn test_comparison_rows() {
        let projection = RoiScenario::default().projection();
        let rows = &projection.comparison;

        assert_eq!(rows[0].category, "Annual Labor Cost");
        assert_eq!(rows[0].as_is, dec!(750000));
        assert_eq!(rows[0].optimized, dec!(375000));
        assert_eq!(rows[1].as_is, dec!(1040));
        assert_eq!(rows[1].optimized, Decimal::ZERO);
        assert_eq!(rows[2].optimized, dec!(5000));
    }

    #[test]
    fn test_slider_snap() {
        assert_eq!(SliderRange::EMPLOYEES.snap(0), 1);
        assert_eq!(SliderRange::EMPLOYEES.snap(250), 100);
        assert_eq!(SliderRange::AVG_SALARY.snap(77_400), 75_000);
        assert_eq!(SliderRange::AVG_SALARY.snap(77_600), 80_000);
        assert_eq!(SliderRange::HOURS_SAVED.snap(83), 80);
        assert_eq!(SliderRange::SOFTWARE_OVERHEAD.snap(1_499), 1_000);
    }

    #[test]
    fn test_round_half_up_matches_browser_rounding() {
        assert_eq!(round_half_up(dec!(2.5)), dec!(3));
        assert_eq!(round_half_up(dec!(-2.5)), dec!(-2));
        assert_eq!(round_half_up(dec!(-2.6)), dec!(-3));
    }
}
