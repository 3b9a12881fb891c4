//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::{extract::FromRef, http::HeaderValue};
use rusqlite::Connection;

use crate::{Error, auth::Credentials, db::initialize, pagination::PaginationConfig};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// The username and password that every request must present.
    pub credentials: Credentials,

    /// The only origin that browsers may call the API from.
    pub allowed_origin: HeaderValue,

    /// The config that controls how lists of records are paged.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or if
    /// `allowed_origin` is not a valid header value.
    pub fn new(
        db_connection: Connection,
        credentials: Credentials,
        allowed_origin: &str,
        pagination_config: PaginationConfig,
    ) -> Result<Self, Error> {
        let allowed_origin = HeaderValue::from_str(allowed_origin)
            .map_err(|_| Error::InvalidOrigin(allowed_origin.to_owned()))?;

        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            credentials,
            allowed_origin,
            pagination_config,
        })
    }
}

impl FromRef<AppState> for Credentials {
    fn from_ref(state: &AppState) -> Self {
        state.credentials.clone()
    }
}
