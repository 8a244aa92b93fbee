//! Combined order-distribution report
//!
//! Bundles the weekday breakdown and the peak hours into the single report
//! served to clients.

use serde::{Deserialize, Serialize};
use types::errors::QueryError;
use types::table::OrdersTable;

use crate::hours::{hour_distribution, HourBucket};
use crate::weekday::{day_of_week_distribution, DayBucket};

/// Label for the period covered by the loaded table.
pub const ANALYSIS_PERIOD: &str = "All available data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Orders with a valid weekday; the day counts sum to this.
    pub total_orders: u64,
    /// Orders left out for an out-of-range `order_dow`.
    pub excluded_orders: u64,
    pub analysis_period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDistribution {
    pub summary: DistributionSummary,
    pub day_of_week_distribution: Vec<DayBucket>,
    pub peak_hours: Vec<HourBucket>,
}

/// Weekday distribution plus the `peak` busiest hours.
pub fn order_distribution(table: &OrdersTable, peak: usize) -> Result<OrderDistribution, QueryError> {
    let hours = hour_distribution(table, peak)?;
    let days = day_of_week_distribution(table)?;

    Ok(OrderDistribution {
        summary: DistributionSummary {
            total_orders: days.total_orders,
            excluded_orders: days.excluded_orders,
            analysis_period: ANALYSIS_PERIOD.to_string(),
        },
        day_of_week_distribution: days.days,
        peak_hours: hours.peak_hours,
    })
}
