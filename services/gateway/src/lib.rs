//! Basket KPIs HTTP API
//!
//! Thin transport over the aggregation engine: parses query strings, maps
//! engine errors onto status codes and serializes results as JSON.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod shutdown;
pub mod state;

pub use router::create_router;
pub use state::AppState;
