//! Error types for the basket KPI service
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Errors raised by query computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A caller-supplied argument violates its declared type or bounds.
    #[error("Invalid query parameter: {constraint} (received {value:?})")]
    InvalidParameter {
        name: String,
        value: String,
        constraint: String,
    },

    /// A computation needing a non-zero denominator ran against zero rows.
    #[error("Empty dataset: cannot compute {operation} over zero orders")]
    EmptyDataset { operation: String },

    /// An aggregate does not fit a JSON-safe integer.
    #[error("Numeric overflow: {value} exceeds the portable integer range")]
    NumericOverflow { value: String },
}

impl QueryError {
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        QueryError::InvalidParameter {
            name: name.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }

    pub fn empty_dataset(operation: impl Into<String>) -> Self {
        QueryError::EmptyDataset {
            operation: operation.into(),
        }
    }

    /// Stable machine-readable code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidParameter { .. } => "INVALID_PARAMETER",
            QueryError::EmptyDataset { .. } => "EMPTY_DATASET",
            QueryError::NumericOverflow { .. } => "NUMERIC_OVERFLOW",
        }
    }
}

/// Table construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Category name must not be empty (column {index})")]
    EmptyCategoryName { index: usize },

    #[error("Duplicate category column: {name}")]
    DuplicateCategory { name: String },

    #[error("Category column {name} collides with a reserved column")]
    ReservedCategory { name: String },

    #[error("Duplicate order_id {order_id} at row {row}")]
    DuplicateOrderId { row: usize, order_id: String },

    #[error("Row {row} has {actual} item counts, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
