//! Identifier types for order records
//!
//! Source datasets key orders by either a numeric or a textual id, so the
//! identifier keeps whichever form was loaded instead of forcing one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
///
/// Serialized without a tag: integers stay JSON numbers, text stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Int(i64),
    Text(String),
}

impl OrderId {
    /// Parse a raw cell, preferring the integer form when it fits.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => OrderId::Int(n),
            Err(_) => OrderId::Text(trimmed.to_string()),
        }
    }
}

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        OrderId::Int(value)
    }
}

impl From<i32> for OrderId {
    fn from(value: i32) -> Self {
        OrderId::Int(i64::from(value))
    }
}

impl From<u32> for OrderId {
    fn from(value: u32) -> Self {
        OrderId::Int(i64::from(value))
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        OrderId::Text(value.to_string())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Int(n) => write!(f, "{}", n),
            OrderId::Text(s) => write!(f, "{}", s),
        }
    }
}
