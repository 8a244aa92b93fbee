//! Top-category ranker
//!
//! Ranks categories by total items, descending. Equal totals are ordered by
//! category name ascending, so the ranking is identical across runs.
//! Categories with zero items stay eligible and rank last.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;
use types::errors::QueryError;
use types::numeric::exact_integer;
use types::table::OrdersTable;

use crate::validator::LIMIT;

/// One ranked category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total_items: u64,
}

/// Top categories along with the limit that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRanking {
    pub limit: usize,
    pub top_categories: Vec<CategoryTotal>,
}

/// Rank categories and keep the first `limit`.
///
/// `limit` must lie within [`LIMIT`]; a limit above the number of
/// categories returns every category.
pub fn top_categories(table: &OrdersTable, limit: usize) -> Result<CategoryRanking, QueryError> {
    let limit = LIMIT.check(i64::try_from(limit).unwrap_or(i64::MAX))?;

    let mut totals: Vec<(&str, u128)> = table
        .categories()
        .iter()
        .enumerate()
        .map(|(index, name)| (name.as_str(), table.column(index).map(u128::from).sum()))
        .collect();

    totals.sort_by(rank_order);
    totals.truncate(limit);

    let top_categories = totals
        .into_iter()
        .map(|(name, total)| {
            Ok(CategoryTotal {
                category: name.to_string(),
                total_items: exact_integer(total)?,
            })
        })
        .collect::<Result<Vec<_>, QueryError>>()?;

    debug!(
        limit,
        returned = top_categories.len(),
        categories = table.category_count(),
        "Ranked top categories"
    );

    Ok(CategoryRanking {
        limit,
        top_categories,
    })
}

/// Descending by total, then ascending by name.
fn rank_order(a: &(&str, u128), b: &(&str, u128)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
