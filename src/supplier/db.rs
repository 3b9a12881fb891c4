//! Database operations for suppliers.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    database_id::SupplierId,
    pagination::Page,
    supplier::{Supplier, SupplierData},
    transaction::count_transactions_for_supplier,
};

/// Create a supplier and return it with its generated ID.
pub fn create_supplier(data: SupplierData, connection: &Connection) -> Result<Supplier, Error> {
    connection.execute(
        "INSERT INTO suppliers (supplier_name, supplier_contact_person, supplier_contact_number)
        VALUES (?1, ?2, ?3);",
        (
            &data.supplier_name,
            &data.supplier_contact_person,
            &data.supplier_contact_number,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(data.with_id(id))
}

/// Retrieve a single supplier by ID.
pub fn get_supplier(supplier_id: SupplierId, connection: &Connection) -> Result<Supplier, Error> {
    connection
        .prepare(
            "SELECT id, supplier_name, supplier_contact_person, supplier_contact_number
            FROM suppliers WHERE id = :id;",
        )?
        .query_row(&[(":id", &supplier_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve a page of suppliers in the order they were created.
pub fn get_suppliers(page: Page, connection: &Connection) -> Result<Vec<Supplier>, Error> {
    connection
        .prepare(
            "SELECT id, supplier_name, supplier_contact_person, supplier_contact_number
            FROM suppliers ORDER BY id ASC LIMIT ?1 OFFSET ?2;",
        )?
        .query_map((page.limit, page.offset), map_row)?
        .map(|maybe_supplier| maybe_supplier.map_err(|error| error.into()))
        .collect()
}

/// Replace every field of a supplier and return the updated supplier.
///
/// # Errors
///
/// Returns [Error::UpdateMissingSupplier] if the supplier doesn't exist.
/// Nothing is written if any step fails.
pub fn update_supplier(
    supplier_id: SupplierId,
    data: SupplierData,
    connection: &Connection,
) -> Result<Supplier, Error> {
    let transaction = connection.unchecked_transaction()?;

    let rows_affected = transaction.execute(
        "UPDATE suppliers
        SET supplier_name = ?1, supplier_contact_person = ?2, supplier_contact_number = ?3
        WHERE id = ?4",
        (
            &data.supplier_name,
            &data.supplier_contact_person,
            &data.supplier_contact_number,
            supplier_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingSupplier(supplier_id));
    }

    let supplier = get_supplier(supplier_id, &transaction)?;
    transaction.commit()?;

    Ok(supplier)
}

/// Delete a supplier by ID.
///
/// # Errors
///
/// Returns [Error::DeleteMissingSupplier] if the supplier doesn't exist, or
/// [Error::SupplierHasTransactions] if any transaction still refers to it.
pub fn delete_supplier(supplier_id: SupplierId, connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    match get_supplier(supplier_id, &transaction) {
        Ok(_) => {}
        Err(Error::NotFound) => return Err(Error::DeleteMissingSupplier(supplier_id)),
        Err(error) => return Err(error),
    }

    if count_transactions_for_supplier(supplier_id, &transaction)? > 0 {
        return Err(Error::SupplierHasTransactions);
    }

    transaction
        .execute("DELETE FROM suppliers WHERE id = ?1", [supplier_id])
        .map_err(|error| match Error::from(error) {
            Error::InvalidForeignKey => Error::SupplierHasTransactions,
            error => error,
        })?;

    transaction.commit()?;

    Ok(())
}

/// Initialize the supplier table.
pub fn create_supplier_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS suppliers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            supplier_name TEXT NOT NULL,
            supplier_contact_person TEXT NOT NULL,
            supplier_contact_number TEXT NOT NULL
        );",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Supplier, rusqlite::Error> {
    Ok(Supplier {
        id: row.get(0)?,
        supplier_name: row.get(1)?,
        supplier_contact_person: row.get(2)?,
        supplier_contact_number: row.get(3)?,
    })
}

#[cfg(test)]
mod supplier_query_tests {
    use crate::{
        Error,
        pagination::Page,
        supplier::{
            SupplierData, create_supplier, delete_supplier, get_supplier, get_suppliers,
            update_supplier,
        },
        test_utils::get_test_connection,
        transaction::{TransactionData, create_transaction, get_transaction},
    };

    fn acme() -> SupplierData {
        SupplierData {
            supplier_name: "Acme".to_owned(),
            supplier_contact_person: "Bob".to_owned(),
            supplier_contact_number: "555-0100".to_owned(),
        }
    }

    fn widget(supplier_id: i64) -> TransactionData {
        TransactionData {
            product_name: "Widget".to_owned(),
            quantity: 5,
            price: 9.99,
            vat: true,
            category: "tools".to_owned(),
            description: "x".to_owned(),
            date: "2024-01-01".to_owned(),
            supplier_id,
        }
    }

    const ALL: Page = Page {
        offset: 0,
        limit: 100,
    };

    #[test]
    fn create_supplier_succeeds() {
        let connection = get_test_connection();

        let supplier = create_supplier(acme(), &connection).expect("Could not create supplier");

        assert_eq!(supplier.id, 1);
        assert_eq!(supplier.supplier_name, "Acme");
        assert_eq!(supplier.supplier_contact_person, "Bob");
        assert_eq!(supplier.supplier_contact_number, "555-0100");
    }

    #[test]
    fn ids_increase_and_are_not_reused() {
        let connection = get_test_connection();
        let first = create_supplier(acme(), &connection).unwrap();
        let second = create_supplier(acme(), &connection).unwrap();
        delete_supplier(second.id, &connection).unwrap();

        let third = create_supplier(acme(), &connection).unwrap();

        assert!(first.id < second.id);
        assert!(second.id < third.id);
    }

    #[test]
    fn get_supplier_succeeds() {
        let connection = get_test_connection();
        let inserted = create_supplier(acme(), &connection).unwrap();

        let selected = get_supplier(inserted.id, &connection);

        assert_eq!(Ok(inserted), selected);
    }

    #[test]
    fn get_supplier_with_invalid_id_returns_not_found() {
        let connection = get_test_connection();
        let inserted = create_supplier(acme(), &connection).unwrap();

        let selected = get_supplier(inserted.id + 123, &connection);

        assert_eq!(selected, Err(Error::NotFound));
    }

    #[test]
    fn get_suppliers_respects_limit_and_offset() {
        let connection = get_test_connection();
        let inserted: Vec<_> = ["Acme", "Globex", "Initech"]
            .into_iter()
            .map(|name| {
                create_supplier(
                    SupplierData {
                        supplier_name: name.to_owned(),
                        ..acme()
                    },
                    &connection,
                )
                .unwrap()
            })
            .collect();

        let all = get_suppliers(ALL, &connection).unwrap();
        let first = get_suppliers(
            Page {
                offset: 0,
                limit: 1,
            },
            &connection,
        )
        .unwrap();
        let rest = get_suppliers(
            Page {
                offset: 1,
                limit: 100,
            },
            &connection,
        )
        .unwrap();

        assert_eq!(all, inserted);
        assert_eq!(first, inserted[..1]);
        assert_eq!(rest, inserted[1..]);
    }

    #[test]
    fn update_supplier_replaces_all_fields() {
        let connection = get_test_connection();
        let supplier = create_supplier(acme(), &connection).unwrap();
        let new_data = SupplierData {
            supplier_name: "Globex".to_owned(),
            supplier_contact_person: "Hank".to_owned(),
            supplier_contact_number: "555-0199".to_owned(),
        };

        let updated = update_supplier(supplier.id, new_data.clone(), &connection)
            .expect("Could not update supplier");

        assert_eq!(updated, new_data.with_id(supplier.id));
        assert_eq!(get_supplier(supplier.id, &connection), Ok(updated));
    }

    #[test]
    fn update_supplier_with_invalid_id_returns_error() {
        let connection = get_test_connection();
        let supplier = create_supplier(acme(), &connection).unwrap();
        let new_data = SupplierData {
            supplier_name: "Globex".to_owned(),
            ..acme()
        };

        let result = update_supplier(999999, new_data, &connection);

        assert_eq!(result, Err(Error::UpdateMissingSupplier(999999)));
        assert_eq!(get_supplier(supplier.id, &connection), Ok(supplier));
    }

    #[test]
    fn delete_supplier_succeeds() {
        let connection = get_test_connection();
        let supplier = create_supplier(acme(), &connection).unwrap();

        let result = delete_supplier(supplier.id, &connection);

        assert!(result.is_ok());
        assert_eq!(get_supplier(supplier.id, &connection), Err(Error::NotFound));
    }

    #[test]
    fn delete_supplier_with_invalid_id_returns_error() {
        let connection = get_test_connection();

        let result = delete_supplier(999999, &connection);

        assert_eq!(result, Err(Error::DeleteMissingSupplier(999999)));
    }

    #[test]
    fn delete_supplier_with_transactions_is_refused() {
        let connection = get_test_connection();
        let supplier = create_supplier(acme(), &connection).unwrap();
        let transaction = create_transaction(widget(supplier.id), &connection).unwrap();

        let result = delete_supplier(supplier.id, &connection);

        assert_eq!(result, Err(Error::SupplierHasTransactions));
        assert_eq!(get_supplier(supplier.id, &connection), Ok(supplier));
        assert_eq!(get_transaction(transaction.id, &connection), Ok(transaction));
    }
}
