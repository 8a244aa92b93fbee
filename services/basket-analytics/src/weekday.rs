//! Day-of-week distribution calculator
//!
//! Counts orders per weekday and reports each count as a share of the
//! counted orders. All seven days are always reported, including days with
//! no orders. Rows whose `order_dow` is outside 0..=6 are left out of the
//! tally and reported as `excluded_orders`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use types::errors::QueryError;
use types::numeric::{exact_integer, percentage, ratio, PERCENTAGE_DP, PROPORTION_DP};
use types::table::{OrdersTable, DAYS_IN_WEEK};

/// Weekday names keyed by `order_dow`; index 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in `order_dow` order.
    pub fn all() -> &'static [Weekday; DAYS_IN_WEEK] {
        &[
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ]
    }

    pub fn from_index(index: usize) -> Option<Weekday> {
        Self::all().get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

/// Orders placed on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Weekday name, e.g. "Sunday".
    pub day: String,
    pub day_number: u8,
    pub orders: u64,
    /// Share of counted orders, 4 decimal places.
    pub proportion: f64,
    /// Share of counted orders as a percentage, 1 decimal place.
    pub percentage: f64,
}

/// Weekday breakdown of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDistribution {
    /// Orders with a valid weekday; the denominator of every share.
    pub total_orders: u64,
    pub excluded_orders: u64,
    /// Exactly seven buckets, Sunday first.
    pub days: Vec<DayBucket>,
}

/// Count orders per weekday.
pub fn day_of_week_distribution(table: &OrdersTable) -> Result<DayDistribution, QueryError> {
    let mut counts = [0u64; DAYS_IN_WEEK];
    let mut excluded = 0u64;
    for row in table.rows() {
        match row.weekday() {
            Some(day) => counts[day] += 1,
            None => excluded += 1,
        }
    }

    if excluded > 0 {
        warn!(excluded, "Skipping orders with out-of-range order_dow");
    }

    let counted: u64 = counts.iter().sum();
    if counted == 0 {
        return Err(QueryError::empty_dataset("day-of-week distribution"));
    }
    let total_orders = exact_integer(u128::from(counted))?;

    let days = Weekday::all()
        .iter()
        .map(|day| {
            let orders = counts[day.index()];
            Ok(DayBucket {
                day: day.name().to_string(),
                day_number: day.index() as u8,
                orders,
                proportion: ratio(orders, total_orders, PROPORTION_DP, "day-of-week proportion")?,
                percentage: percentage(
                    orders,
                    total_orders,
                    PERCENTAGE_DP,
                    "day-of-week percentage",
                )?,
            })
        })
        .collect::<Result<Vec<_>, QueryError>>()?;

    debug!(total_orders, excluded, "Computed day-of-week distribution");

    Ok(DayDistribution {
        total_orders,
        excluded_orders: excluded,
        days,
    })
}
