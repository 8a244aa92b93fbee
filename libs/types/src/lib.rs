//! Types library for the basket KPI service
//!
//! This library provides the core type definitions shared by the aggregation
//! engine and the HTTP gateway: the immutable orders table, its identifiers,
//! the query error taxonomy and the numeric normalizer that turns internal
//! aggregates into JSON-safe values.
//!
//! # Modules
//! - `ids`: Order identifiers (integer or string)
//! - `table`: The loaded orders table and its rows
//! - `numeric`: Result normalization (exact integers, fixed-decimal floats)
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod table;
pub mod numeric;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::table::*;
    pub use crate::numeric::*;
    pub use crate::errors::*;
}
