//! Query parameter validation
//!
//! Bounds are checked before any computation runs. Out-of-range values are
//! rejected rather than clamped so that client mistakes surface as errors.

use tracing::debug;
use types::errors::QueryError;

/// Declared bounds of an integer query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamBounds {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
    /// Value used when the parameter is absent.
    pub default: i64,
}

/// `limit` of the top-categories query.
pub const LIMIT: ParamBounds = ParamBounds {
    name: "limit",
    min: 1,
    max: 100,
    default: 10,
};

/// Number of peak hours reported by the distribution query.
pub const PEAK_HOURS: ParamBounds = ParamBounds {
    name: "peak_hours",
    min: 1,
    max: 24,
    default: 10,
};

impl ParamBounds {
    /// Human-readable range constraint, e.g. "limit must be between 1 and 100".
    pub fn constraint(&self) -> String {
        format!("{} must be between {} and {}", self.name, self.min, self.max)
    }

    /// Validate raw query text. `None` yields the default.
    pub fn validate(&self, raw: Option<&str>) -> Result<usize, QueryError> {
        let Some(raw) = raw else {
            return self.check(self.default);
        };

        let value = raw.parse::<i64>().map_err(|_| {
            debug!(param = self.name, value = raw, "Rejecting non-integer parameter");
            QueryError::invalid_parameter(
                self.name,
                raw,
                format!("{} (expected an integer)", self.constraint()),
            )
        })?;

        self.check(value)
    }

    /// Validate an already-typed value against the bounds.
    pub fn check(&self, value: i64) -> Result<usize, QueryError> {
        if value < self.min || value > self.max {
            debug!(param = self.name, value, "Rejecting out-of-range parameter");
            return Err(QueryError::invalid_parameter(
                self.name,
                value.to_string(),
                self.constraint(),
            ));
        }

        usize::try_from(value)
            .map_err(|_| QueryError::invalid_parameter(self.name, value.to_string(), self.constraint()))
    }
}
