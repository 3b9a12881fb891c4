//! Supplier ledger is a small record-keeping backend for purchase
//! transactions and the suppliers they were bought from.
//!
//! This library provides a JSON REST API over a SQLite database, guarded by a
//! single HTTP Basic credential.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::{StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod auth;
mod database_id;
mod db;
pub mod endpoints;
mod extract;
mod logging;
mod pagination;
mod routing;
mod supplier;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use auth::Credentials;
pub use database_id::{DatabaseId, SupplierId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use routing::build_router;
pub use supplier::{Supplier, SupplierData, create_supplier};
pub use transaction::{Transaction, TransactionData, create_transaction};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request did not carry a basic auth header, or the username and
    /// password in it did not match the configured credentials.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// The configured username or password is empty.
    #[error("the basic auth username and password must not be empty")]
    EmptyCredentials,

    /// The configured CORS origin is not a valid header value.
    #[error("invalid CORS origin \"{0}\"")]
    InvalidOrigin(String),

    /// The request's path, query string or body could not be parsed.
    ///
    /// Holds the status code and message of the rejected extractor.
    #[error("{1}")]
    InvalidRequest(StatusCode, String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A write referenced a row that does not exist.
    ///
    /// Data access functions should replace this with a more specific error,
    /// e.g. [Error::InvalidSupplier], where they know which key was at fault.
    #[error("a foreign key constraint failed")]
    InvalidForeignKey,

    /// A transaction referenced a supplier that is not in the database.
    #[error("Supplier with ID {0} does not exist")]
    InvalidSupplier(SupplierId),

    /// Tried to delete a supplier that still has transactions.
    #[error("Cannot delete supplier with existing transactions")]
    SupplierHasTransactions,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Tried to update a transaction that does not exist
    #[error("Transaction with ID {0} not found")]
    UpdateMissingTransaction(TransactionId),

    /// Tried to delete a transaction that does not exist
    #[error("Transaction with ID {0} not found")]
    DeleteMissingTransaction(TransactionId),

    /// Tried to update a supplier that does not exist
    #[error("Supplier with ID {0} not found")]
    UpdateMissingSupplier(SupplierId),

    /// Tried to delete a supplier that does not exist
    #[error("Supplier with ID {0} not found")]
    DeleteMissingSupplier(SupplierId),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 787 => {
                Error::InvalidForeignKey
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// A human readable description of what went wrong.
    pub detail: String,
}

/// The JSON body sent to the client to confirm a deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// A human readable confirmation.
    pub message: String,
}

impl Message {
    pub(crate) fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_owned(),
        })
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidCredentials => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(WWW_AUTHENTICATE, "Basic")],
                    detail(&self),
                )
                    .into_response();
            }
            Error::NotFound
            | Error::UpdateMissingTransaction(_)
            | Error::DeleteMissingTransaction(_)
            | Error::UpdateMissingSupplier(_)
            | Error::DeleteMissingSupplier(_) => StatusCode::NOT_FOUND,
            Error::InvalidSupplier(_) | Error::SupplierHasTransactions => StatusCode::BAD_REQUEST,
            Error::InvalidRequest(status, _) => *status,
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDetail {
                        detail: "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                    }),
                )
                    .into_response();
            }
        };

        (status, detail(&self)).into_response()
    }
}

fn detail(error: &Error) -> Json<ErrorDetail> {
    Json(ErrorDetail {
        detail: error.to_string(),
    })
}

#[cfg(test)]
mod error_tests {
    use axum::{
        http::{StatusCode, header::WWW_AUTHENTICATE},
        response::IntoResponse,
    };
    use rusqlite::Connection;

    use crate::{Error, ErrorDetail, test_utils::parse_json};

    #[tokio::test]
    async fn invalid_credentials_has_basic_challenge() {
        let response = Error::InvalidCredentials.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(WWW_AUTHENTICATE).unwrap(), "Basic");
        let body: ErrorDetail = parse_json(response).await;
        assert_eq!(body.detail, "Incorrect username or password");
    }

    #[tokio::test]
    async fn supplier_with_transactions_is_bad_request() {
        let response = Error::SupplierHasTransactions.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorDetail = parse_json(response).await;
        assert_eq!(
            body.detail,
            "Cannot delete supplier with existing transactions"
        );
    }

    #[tokio::test]
    async fn sql_error_does_not_leak_details() {
        let error = Error::SqlError(rusqlite::Error::ExecuteReturnedResults);

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorDetail = parse_json(response).await;
        assert!(!body.detail.contains("SQL"));
    }

    #[tokio::test]
    async fn invalid_request_keeps_status_and_message() {
        let error = Error::InvalidRequest(
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing field `price`".to_owned(),
        );

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorDetail = parse_json(response).await;
        assert_eq!(body.detail, "missing field `price`");
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let connection = Connection::open_in_memory().unwrap();

        let result: Result<i64, Error> = connection
            .query_row("SELECT 1 WHERE 0", [], |row| row.get(0))
            .map_err(Error::from);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn foreign_key_failure_maps_to_invalid_foreign_key() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(
                "PRAGMA foreign_keys = ON;
                CREATE TABLE parent (id INTEGER PRIMARY KEY);
                CREATE TABLE child (parent_id INTEGER NOT NULL REFERENCES parent(id));",
            )
            .unwrap();

        let result = connection
            .execute("INSERT INTO child (parent_id) VALUES (42)", [])
            .map_err(Error::from);

        assert_eq!(result, Err(Error::InvalidForeignKey));
    }
}
