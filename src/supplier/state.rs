use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{AppState, PaginationConfig};

/// The state needed by the supplier endpoints.
#[derive(Debug, Clone)]
pub struct SupplierState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
    /// The defaults for listing suppliers.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for SupplierState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config,
        }
    }
}
