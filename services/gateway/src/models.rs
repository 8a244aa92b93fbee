use serde::{Deserialize, Serialize};

/// Query string of `GET /categories/top`.
///
/// Kept as raw text so that non-numeric input reaches the validator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopCategoriesParams {
    pub limit: Option<String>,
}

/// Query string of `GET /orders/distribution`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistributionParams {
    pub peak_hours: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}
