//! Basket Analytics Engine
//!
//! Answers read-only statistical queries over an in-memory orders table:
//! - Summary KPIs (order and item totals, average and median basket size)
//! - Top categories by total items
//! - Day-of-week order distribution
//! - Peak-hour order distribution
//!
//! Every query is a pure, synchronous function over a shared
//! `&OrdersTable`; nothing is cached and the table is never mutated, so any
//! number of queries may run concurrently against the same table.
//!
//! # Architecture
//!
//! ```text
//!        orders.csv
//!            │
//!       ┌────▼────┐
//!       │ Ingest  │  ← Parses, fills missing counts with 0
//!       └────┬────┘
//!            │  Arc<OrdersTable>
//!   ┌────────┼──────────┬─────────────┐
//!   │        │          │             │
//! ┌─▼──┐ ┌───▼──────┐ ┌─▼─────────┐ ┌─▼─────┐
//! │KPIs│ │Categories│ │Day-of-week│ │ Hours │  ← Validated params
//! └─┬──┘ └───┬──────┘ └─┬─────────┘ └─┬─────┘
//!   │        │          │             │
//! ┌─▼────────▼──────────▼─────────────▼──┐
//! │   Normalizer (u64 / fixed-dp f64)    │
//! └──────────────────────────────────────┘
//! ```

pub mod categories;
pub mod distribution;
pub mod hours;
pub mod ingestion;
pub mod kpis;
pub mod validator;
pub mod weekday;

pub use categories::{top_categories, CategoryRanking, CategoryTotal};
pub use distribution::{order_distribution, DistributionSummary, OrderDistribution};
pub use hours::{format_hour, hour_distribution, HourBucket, HourDistribution};
pub use ingestion::{load_orders_csv, read_orders, LoadError};
pub use kpis::{summary, KpiSummary};
pub use validator::{ParamBounds, LIMIT, PEAK_HOURS};
pub use weekday::{day_of_week_distribution, DayBucket, DayDistribution, Weekday};

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
