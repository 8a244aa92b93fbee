//! Summary KPI calculator
//!
//! Order count, item count, and the average and median number of items per
//! order. Per-order item counts are the row sums across all categories.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use types::errors::QueryError;
use types::numeric::{exact_integer, midpoint, ratio, round_fixed, AVERAGE_DP};
use types::table::{OrderRow, OrdersTable};

/// Core KPIs over the whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_orders: u64,
    pub total_items: u64,
    /// Rounded to 2 decimal places.
    #[serde(rename = "avg_items_per_order")]
    pub average_items_per_order: f64,
    /// Even row counts average the two middle values; rounded to 2 places.
    pub median_items_per_order: f64,
}

/// Compute the summary KPIs. An empty table is an `EmptyDataset` error.
pub fn summary(table: &OrdersTable) -> Result<KpiSummary, QueryError> {
    if table.is_empty() {
        return Err(QueryError::empty_dataset("summary KPIs"));
    }

    let mut per_order: Vec<u128> = table.rows().iter().map(OrderRow::total_items).collect();
    let total_items = exact_integer(per_order.iter().sum())?;
    let total_orders = exact_integer(table.len() as u128)?;

    let average_items_per_order =
        ratio(total_items, total_orders, AVERAGE_DP, "average items per order")?;

    per_order.sort_unstable();
    let median_items_per_order = median(&per_order)?;

    debug!(total_orders, total_items, "Computed summary KPIs");

    Ok(KpiSummary {
        total_orders,
        total_items,
        average_items_per_order,
        median_items_per_order,
    })
}

/// Median of an ascending slice.
fn median(sorted: &[u128]) -> Result<f64, QueryError> {
    if sorted.is_empty() {
        return Err(QueryError::empty_dataset("median items per order"));
    }

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        let value = exact_integer(sorted[mid])?;
        round_fixed(Decimal::from(value), AVERAGE_DP)
    } else {
        let low = exact_integer(sorted[mid - 1])?;
        let high = exact_integer(sorted[mid])?;
        midpoint(low, high, AVERAGE_DP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<OrderRow>) -> OrdersTable {
        OrdersTable::new(vec!["fruit".to_string(), "dairy".to_string()], rows).unwrap()
    }

    #[test]
    fn test_three_row_scenario() {
        let t = table(vec![
            OrderRow::new(1, 0, 10, vec![2, 0]),
            OrderRow::new(2, 1, 14, vec![1, 3]),
            OrderRow::new(3, 2, 10, vec![0, 0]),
        ]);

        let kpis = summary(&t).unwrap();
        assert_eq!(kpis.total_orders, 3);
        assert_eq!(kpis.total_items, 6);
        assert_eq!(kpis.average_items_per_order, 2.0);
        assert_eq!(kpis.median_items_per_order, 2.0);
    }

    #[test]
    fn test_average_rounded_to_two_places() {
        let t = OrdersTable::new(
            vec!["fresh_fruits".into(), "yogurt".into(), "packaged_cheese".into()],
            vec![
                OrderRow::new("1", 0, 10, vec![2, 1, 1]),
                OrderRow::new("2", 1, 14, vec![0, 3, 1]),
                OrderRow::new("3", 2, 10, vec![5, 0, 0]),
            ],
        )
        .unwrap();

        let kpis = summary(&t).unwrap();
        assert_eq!(kpis.total_items, 13);
        assert_eq!(kpis.average_items_per_order, 4.33);
        assert_eq!(kpis.median_items_per_order, 4.0);
    }

    #[test]
    fn test_even_row_count_median_averages_middle() {
        let t = table(vec![
            OrderRow::new(1, 0, 0, vec![1, 0]),
            OrderRow::new(2, 0, 0, vec![2, 0]),
            OrderRow::new(3, 0, 0, vec![3, 0]),
            OrderRow::new(4, 0, 0, vec![10, 0]),
        ]);

        let kpis = summary(&t).unwrap();
        assert_eq!(kpis.median_items_per_order, 2.5);
        assert_eq!(kpis.average_items_per_order, 4.0);
    }

    #[test]
    fn test_empty_table_is_empty_dataset() {
        let err = summary(&table(vec![])).unwrap_err();
        assert!(matches!(err, QueryError::EmptyDataset { .. }));
    }

    #[test]
    fn test_table_without_categories_counts_zero_items() {
        let t = OrdersTable::new(vec![], vec![OrderRow::new(1, 0, 0, vec![])]).unwrap();
        let kpis = summary(&t).unwrap();
        assert_eq!(kpis.total_items, 0);
        assert_eq!(kpis.average_items_per_order, 0.0);
        assert_eq!(kpis.median_items_per_order, 0.0);
    }

    #[test]
    fn test_overflowing_total_is_reported() {
        let t = table(vec![OrderRow::new(1, 0, 0, vec![u64::MAX, 1])]);
        let err = summary(&t).unwrap_err();
        assert!(matches!(err, QueryError::NumericOverflow { .. }));
    }

    #[test]
    fn test_serialized_field_names() {
        let t = table(vec![OrderRow::new(1, 0, 0, vec![1, 1])]);
        let json = serde_json::to_value(summary(&t).unwrap()).unwrap();
        assert_eq!(json["total_orders"], 1);
        assert_eq!(json["total_items"], 2);
        assert_eq!(json["avg_items_per_order"], 2.0);
        assert_eq!(json["median_items_per_order"], 2.0);
    }
}
