//! Peak-hour distribution calculator
//!
//! Counts orders per hour of day and ranks hours by order count. Ties are
//! ordered by hour ascending. Rows whose `order_hour_of_day` is outside
//! 0..=23 are left out of the tally.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use types::errors::QueryError;
use types::table::{OrdersTable, HOURS_IN_DAY};

use crate::validator::PEAK_HOURS;

/// Orders placed during one hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    /// 12-hour label, e.g. "10:00 AM".
    pub hour: String,
    pub hour_24: u8,
    pub orders: u64,
}

impl HourBucket {
    fn new(hour_24: usize, orders: u64) -> Self {
        Self {
            hour: format_hour(hour_24),
            hour_24: hour_24 as u8,
            orders,
        }
    }
}

/// Hour-of-day breakdown of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourDistribution {
    /// Orders with a valid hour.
    pub total_orders: u64,
    pub excluded_orders: u64,
    /// All 24 hours, midnight first.
    pub hours: Vec<HourBucket>,
    /// The busiest hours, most orders first.
    pub peak_hours: Vec<HourBucket>,
}

/// Label a 24-hour clock hour in 12-hour form.
///
/// `0` is "12:00 AM", `12` is "12:00 PM", `13` is "1:00 PM".
pub fn format_hour(hour_24: usize) -> String {
    match hour_24 {
        0 => "12:00 AM".to_string(),
        h if h < 12 => format!("{}:00 AM", h),
        12 => "12:00 PM".to_string(),
        h => format!("{}:00 PM", h - 12),
    }
}

/// Count orders per hour and keep the `peak` busiest hours.
///
/// `peak` must lie within [`PEAK_HOURS`].
pub fn hour_distribution(table: &OrdersTable, peak: usize) -> Result<HourDistribution, QueryError> {
    let peak = PEAK_HOURS.check(i64::try_from(peak).unwrap_or(i64::MAX))?;

    let mut counts = [0u64; HOURS_IN_DAY];
    let mut excluded = 0u64;
    for row in table.rows() {
        match row.hour() {
            Some(hour) => counts[hour] += 1,
            None => excluded += 1,
        }
    }

    if excluded > 0 {
        warn!(excluded, "Skipping orders with out-of-range order_hour_of_day");
    }

    let hours: Vec<HourBucket> = counts
        .iter()
        .enumerate()
        .map(|(hour, &orders)| HourBucket::new(hour, orders))
        .collect();

    let mut ranked = hours.clone();
    ranked.sort_by(|a, b| b.orders.cmp(&a.orders).then_with(|| a.hour_24.cmp(&b.hour_24)));
    ranked.truncate(peak);

    let total_orders: u64 = counts.iter().sum();
    debug!(total_orders, excluded, peak, "Computed hour distribution");

    Ok(HourDistribution {
        total_orders,
        excluded_orders: excluded,
        hours,
        peak_hours: ranked,
    })
}
