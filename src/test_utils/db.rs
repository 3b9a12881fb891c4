use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::db::initialize;

/// An in-memory database with the full schema.
pub(crate) fn get_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");

    connection
}

/// An in-memory database with the full schema, shared the same way as in [crate::AppState].
pub(crate) fn get_test_db_connection() -> Arc<Mutex<Connection>> {
    Arc::new(Mutex::new(get_test_connection()))
}
