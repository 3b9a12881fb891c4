//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{SupplierId, TransactionId},
    pagination::Page,
};

// ============================================================================
// MODELS
// ============================================================================

/// A purchase of some quantity of a product from a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// What was bought.
    pub product_name: String,
    /// How many units were bought.
    pub quantity: i64,
    /// The price of the purchase.
    pub price: f64,
    /// Whether VAT applies to the purchase.
    pub vat: bool,
    /// A free-form grouping, e.g. "tools".
    pub category: String,
    /// A text description of the purchase.
    pub description: String,
    /// When the purchase happened.
    ///
    /// This is stored exactly as the client sent it, the format is not checked.
    pub date: String,
    /// The ID of the supplier the product was bought from.
    pub supplier_id: SupplierId,
}

/// The fields of a transaction without its ID.
///
/// This is the request body for creating a transaction and for replacing an
/// existing transaction, every field is required in both cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    /// What was bought.
    pub product_name: String,
    /// How many units were bought.
    pub quantity: i64,
    /// The price of the purchase.
    pub price: f64,
    /// Whether VAT applies to the purchase.
    pub vat: bool,
    /// A free-form grouping, e.g. "tools".
    pub category: String,
    /// A text description of the purchase.
    pub description: String,
    /// When the purchase happened.
    pub date: String,
    /// The ID of the supplier the product was bought from. Must refer to an existing supplier.
    pub supplier_id: SupplierId,
}

impl TransactionData {
    pub(crate) fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            vat: self.vat,
            category: self.category,
            description: self.description,
            date: self.date,
            supplier_id: self.supplier_id,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const SELECT_COLUMNS: &str = "transactions.id, transactions.product_name, transactions.quantity, \
    transactions.price, transactions.vat, transactions.category, transactions.description, \
    transactions.date, transactions.supplier_id";

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidSupplier] if `supplier_id` does not refer to a valid supplier,
/// - [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    data: TransactionData,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .execute(
            "INSERT INTO transactions
            (product_name, quantity, price, vat, category, description, date, supplier_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            (
                &data.product_name,
                data.quantity,
                data.price,
                data.vat,
                &data.category,
                &data.description,
                &data.date,
                data.supplier_id,
            ),
        )
        .map_err(|error| map_supplier_error(error, data.supplier_id))?;

    let id = connection.last_insert_rowid();

    Ok(data.with_id(id))
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM transactions WHERE id = :id"
        ))?
        .query_row(&[(":id", &id)], map_transaction_row)
        .map_err(|error| error.into())
}

/// Retrieve a page of transactions in the order they were created.
pub fn get_transactions(page: Page, connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM transactions ORDER BY id ASC LIMIT ?1 OFFSET ?2"
        ))?
        .query_map((page.limit, page.offset), map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the transactions bought from a supplier in the order they were created.
pub fn get_transactions_by_supplier(
    supplier_id: SupplierId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM transactions \
            INNER JOIN suppliers ON transactions.supplier_id = suppliers.id \
            WHERE suppliers.id = :supplier_id \
            ORDER BY transactions.id ASC"
        ))?
        .query_map(&[(":supplier_id", &supplier_id)], map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(|error| error.into()))
        .collect()
}

/// Count the transactions that refer to a supplier.
pub fn count_transactions_for_supplier(
    supplier_id: SupplierId,
    connection: &Connection,
) -> Result<i64, Error> {
    connection
        .query_row(
            "SELECT COUNT(id) FROM transactions WHERE supplier_id = ?1",
            [supplier_id],
            |row| row.get(0),
        )
        .map_err(|error| error.into())
}

/// Replace every field of a transaction and return the updated transaction.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid transaction,
/// - [Error::InvalidSupplier] if the new `supplier_id` does not refer to a valid supplier,
/// - [Error::SqlError] if there is some other SQL error.
///
/// Nothing is written if any step fails.
pub fn update_transaction(
    id: TransactionId,
    data: TransactionData,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection.unchecked_transaction()?;

    let rows_affected = transaction
        .execute(
            "UPDATE transactions
            SET product_name = ?1, quantity = ?2, price = ?3, vat = ?4, category = ?5,
                description = ?6, date = ?7, supplier_id = ?8
            WHERE id = ?9",
            (
                &data.product_name,
                data.quantity,
                data.price,
                data.vat,
                &data.category,
                &data.description,
                &data.date,
                data.supplier_id,
                id,
            ),
        )
        .map_err(|error| map_supplier_error(error, data.supplier_id))?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingTransaction(id));
    }

    let updated = get_transaction(id, &transaction)?;
    transaction.commit()?;

    Ok(updated)
}

/// Delete a transaction by its `id`.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if `id` does not refer to a valid transaction.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM transactions WHERE id = :id",
        &[(":id", &id)],
    )?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction(id));
    }

    Ok(())
}

/// Create the transaction table and its indexes.
///
/// The supplier table must be created first.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_name TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            price REAL NOT NULL,
            vat INTEGER NOT NULL,
            category TEXT NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL,
            supplier_id INTEGER NOT NULL,
            FOREIGN KEY(supplier_id) REFERENCES suppliers(id)
        );

        CREATE INDEX IF NOT EXISTS idx_transactions_supplier_id ON transactions(supplier_id);",
    )?;

    Ok(())
}

/// Map a database row to a [Transaction], the row must contain the columns in [SELECT_COLUMNS].
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        product_name: row.get(1)?,
        quantity: row.get(2)?,
        price: row.get(3)?,
        vat: row.get(4)?,
        category: row.get(5)?,
        description: row.get(6)?,
        date: row.get(7)?,
        supplier_id: row.get(8)?,
    })
}

fn map_supplier_error(error: rusqlite::Error, supplier_id: SupplierId) -> Error {
    match Error::from(error) {
        Error::InvalidForeignKey => Error::InvalidSupplier(supplier_id),
        error => error,
    }
}
