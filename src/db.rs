//! Schema creation and the per-request database session.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, TransactionBehavior, Transaction as SqlTransaction};

use crate::{Error, supplier::create_supplier_table, transaction::create_transaction_table};

/// Create the tables for the domain models if they do not exist yet.
///
/// Foreign key enforcement is switched on for `connection`, SQLite leaves it
/// off by default and the setting does not persist in the database file.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_supplier_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Acquire the shared connection for the duration of a request.
///
/// The connection is released when the returned guard is dropped, whether the
/// request succeeded or not.
pub(crate) fn acquire_connection(
    db_connection: &Mutex<Connection>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)
}
