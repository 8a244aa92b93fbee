use std::sync::Arc;
use types::table::OrdersTable;

/// Shared, read-only handle to the loaded dataset.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<OrdersTable>,
}

impl AppState {
    pub fn new(table: OrdersTable) -> Self {
        Self::from_shared(Arc::new(table))
    }

    pub fn from_shared(table: Arc<OrdersTable>) -> Self {
        Self { table }
    }
}
