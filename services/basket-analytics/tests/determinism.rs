//! Determinism and invariant tests for the aggregation engine
//!
//! Validates that every query produces identical output for an unchanged
//! table and that the aggregate invariants hold for arbitrary tables:
//! - Totals independent of row order
//! - Average × order count reproduces the item total
//! - Weekday counts and shares cover every counted order
//! - Rankings are stable, including tie order
//! - Concurrent readers observe identical results

use std::sync::Arc;
use std::thread;

use basket_analytics::{
    day_of_week_distribution, hour_distribution, order_distribution, read_orders, summary,
    top_categories, LIMIT,
};
use proptest::prelude::*;
use types::errors::QueryError;
use types::table::{OrderRow, OrdersTable};

const CATEGORIES: [&str; 4] = ["bakery", "dairy", "fruit", "snacks"];

fn build_table(rows: Vec<(i64, i64, Vec<u64>)>) -> OrdersTable {
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(i, (dow, hour, items))| OrderRow::new(i as i64, dow, hour, items))
        .collect();
    OrdersTable::new(CATEGORIES.iter().map(|c| c.to_string()).collect(), rows).unwrap()
}

fn row_strategy() -> impl Strategy<Value = (i64, i64, Vec<u64>)> {
    (0i64..7, 0i64..24, prop::collection::vec(0u64..50, CATEGORIES.len()))
}

#[test]
fn test_three_row_scenario_end_to_end() {
    let table = build_table(vec![
        (0, 10, vec![0, 0, 2, 0]),
        (1, 14, vec![0, 3, 1, 0]),
        (2, 10, vec![0, 0, 0, 0]),
    ]);

    let kpis = summary(&table).unwrap();
    assert_eq!(kpis.total_orders, 3);
    assert_eq!(kpis.total_items, 6);
    assert_eq!(kpis.average_items_per_order, 2.0);
    assert_eq!(kpis.median_items_per_order, 2.0);

    let ranking = top_categories(&table, 1).unwrap();
    assert_eq!(ranking.top_categories[0].category, "dairy");
    assert_eq!(ranking.top_categories[0].total_items, 3);
}

#[test]
fn test_repeated_queries_are_byte_identical() {
    let table = build_table(vec![
        (0, 9, vec![1, 1, 1, 1]),
        (3, 9, vec![2, 2, 0, 0]),
        (3, 17, vec![0, 0, 2, 2]),
        (6, 17, vec![5, 0, 0, 5]),
    ]);

    let first = serde_json::to_string(&top_categories(&table, 4).unwrap()).unwrap();
    let second = serde_json::to_string(&top_categories(&table, 4).unwrap()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        r#"{"limit":4,"top_categories":[{"category":"bakery","total_items":8},{"category":"snacks","total_items":8},{"category":"dairy","total_items":3},{"category":"fruit","total_items":3}]}"#
    );

    let a = serde_json::to_string(&order_distribution(&table, 5).unwrap()).unwrap();
    let b = serde_json::to_string(&order_distribution(&table, 5).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_limit_validation_cases() {
    for raw in ["0", "-1", "101", "abc"] {
        assert!(matches!(
            LIMIT.validate(Some(raw)),
            Err(QueryError::InvalidParameter { .. })
        ));
    }
    assert_eq!(LIMIT.validate(Some("1")).unwrap(), 1);
    assert_eq!(LIMIT.validate(Some("100")).unwrap(), 100);
}

#[test]
fn test_empty_table_never_yields_nan() {
    let table = build_table(vec![]);
    assert!(matches!(summary(&table), Err(QueryError::EmptyDataset { .. })));
    assert!(matches!(
        day_of_week_distribution(&table),
        Err(QueryError::EmptyDataset { .. })
    ));
}

#[test]
fn test_concurrent_readers_agree() {
    let csv = "order_id,order_dow,order_hour_of_day,fruit,dairy\n\
               1,0,10,2,0\n\
               2,1,14,1,3\n\
               3,2,10,0,0\n\
               4,5,23,4,4\n";
    let table = Arc::new(read_orders(csv.as_bytes()).unwrap());
    let expected = summary(&table).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let kpis = summary(&table).unwrap();
                let ranking = top_categories(&table, 2).unwrap();
                let hours = hour_distribution(&table, 3).unwrap();
                (kpis, ranking, hours)
            })
        })
        .collect();

    for handle in handles {
        let (kpis, ranking, hours) = handle.join().unwrap();
        assert_eq!(kpis, expected);
        assert_eq!(ranking.top_categories[0].category, "dairy");
        assert_eq!(hours.peak_hours[0].hour_24, 10);
    }
}

proptest! {
    #[test]
    fn prop_total_items_matches_cell_sum(rows in prop::collection::vec(row_strategy(), 1..60)) {
        let expected: u64 = rows.iter().flat_map(|(_, _, items)| items.iter()).sum();

        let forward = summary(&build_table(rows.clone())).unwrap();
        let mut reversed_rows = rows;
        reversed_rows.reverse();
        let reversed = summary(&build_table(reversed_rows)).unwrap();

        prop_assert_eq!(forward.total_items, expected);
        prop_assert_eq!(forward, reversed);
    }

    #[test]
    fn prop_average_times_orders_matches_total(rows in prop::collection::vec(row_strategy(), 1..60)) {
        let kpis = summary(&build_table(rows)).unwrap();
        let reconstructed = kpis.average_items_per_order * kpis.total_orders as f64;
        // Average is rounded to 2 places, so the error scales with the order count.
        let tolerance = 0.005 * kpis.total_orders as f64 + 1e-9;
        prop_assert!((reconstructed - kpis.total_items as f64).abs() <= tolerance);
    }

    #[test]
    fn prop_weekday_counts_cover_all_orders(rows in prop::collection::vec(row_strategy(), 1..60)) {
        let table = build_table(rows);
        let dist = day_of_week_distribution(&table).unwrap();

        prop_assert_eq!(dist.days.len(), 7);
        let counted: u64 = dist.days.iter().map(|d| d.orders).sum();
        prop_assert_eq!(counted, table.len() as u64);

        let share: f64 = dist.days.iter().map(|d| d.proportion).sum();
        prop_assert!((share - 1.0).abs() <= 7.0 * 0.00005 + 1e-9);
    }

    #[test]
    fn prop_peak_hours_sorted(rows in prop::collection::vec(row_strategy(), 0..60), peak in 1usize..=24) {
        let dist = hour_distribution(&build_table(rows), peak).unwrap();

        prop_assert_eq!(dist.peak_hours.len(), peak);
        for pair in dist.peak_hours.windows(2) {
            let ordered = pair[0].orders > pair[1].orders
                || (pair[0].orders == pair[1].orders && pair[0].hour_24 < pair[1].hour_24);
            prop_assert!(ordered);
        }
    }
}
