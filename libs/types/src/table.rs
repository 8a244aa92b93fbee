//! The loaded orders table
//!
//! An `OrdersTable` is built once by the loader and then shared read-only
//! (typically behind an `Arc`) by every query. It owns no aggregation logic;
//! it only guarantees a validated shape: unique category columns, unique
//! order ids and one item count per category on every row.
//!
//! Day-of-week and hour values are kept exactly as loaded. Rows carrying
//! out-of-range values stay in the table and are skipped by the distribution
//! queries via [`OrderRow::weekday`] and [`OrderRow::hour`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::TableError;
use crate::ids::OrderId;

/// Columns that describe the order itself rather than a category.
pub const META_COLUMNS: [&str; 4] = [
    "order_id",
    "order_dow",
    "order_hour_of_day",
    "days_since_prior_order",
];

/// Number of weekday buckets (`order_dow` in 0..=6).
pub const DAYS_IN_WEEK: usize = 7;

/// Number of hour buckets (`order_hour_of_day` in 0..=23).
pub const HOURS_IN_DAY: usize = 24;

/// One order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub order_id: OrderId,
    /// Day of week as loaded; valid values are 0 (Sunday) through 6.
    pub order_dow: i64,
    /// Hour of day as loaded; valid values are 0 through 23.
    pub order_hour_of_day: i64,
    /// Item count per category, aligned with `OrdersTable::categories`.
    pub items: Vec<u64>,
}

impl OrderRow {
    pub fn new(
        order_id: impl Into<OrderId>,
        order_dow: i64,
        order_hour_of_day: i64,
        items: Vec<u64>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            order_dow,
            order_hour_of_day,
            items,
        }
    }

    /// Sum of item counts across all categories.
    pub fn total_items(&self) -> u128 {
        self.items.iter().map(|&n| u128::from(n)).sum()
    }

    /// Weekday index when `order_dow` is in range.
    pub fn weekday(&self) -> Option<usize> {
        bucket(self.order_dow, DAYS_IN_WEEK)
    }

    /// Hour index when `order_hour_of_day` is in range.
    pub fn hour(&self) -> Option<usize> {
        bucket(self.order_hour_of_day, HOURS_IN_DAY)
    }
}

fn bucket(value: i64, buckets: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < buckets)
}

/// Immutable, validated table of orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersTable {
    categories: Vec<String>,
    rows: Vec<OrderRow>,
}

impl OrdersTable {
    /// Build a table, validating category names and row widths.
    pub fn new(categories: Vec<String>, rows: Vec<OrderRow>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(categories.len());
        for (index, name) in categories.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(TableError::EmptyCategoryName { index });
            }
            if META_COLUMNS.contains(&name.as_str()) {
                return Err(TableError::ReservedCategory { name: name.clone() });
            }
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateCategory { name: name.clone() });
            }
        }

        let mut ids = HashSet::with_capacity(rows.len());
        for (row, record) in rows.iter().enumerate() {
            if !ids.insert(&record.order_id) {
                return Err(TableError::DuplicateOrderId {
                    row,
                    order_id: record.order_id.to_string(),
                });
            }
            if record.items.len() != categories.len() {
                return Err(TableError::RowWidthMismatch {
                    row,
                    expected: categories.len(),
                    actual: record.items.len(),
                });
            }
        }

        Ok(Self { categories, rows })
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Category names in column order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn rows(&self) -> &[OrderRow] {
        &self.rows
    }

    /// Values of one category column, in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = u64> + '_ {
        self.rows.iter().filter_map(move |row| row.items.get(index).copied())
    }
}
