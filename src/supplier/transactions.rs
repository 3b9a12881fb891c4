//! Endpoint for listing the transactions bought from a supplier.

use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::SupplierId,
    db::acquire_connection,
    extract::PathParam,
    supplier::{SupplierState, get_supplier},
    transaction::{Transaction, get_transactions_by_supplier},
};

/// List a supplier's transactions in the order they were created.
///
/// Returns [Error::NotFound] if the supplier does not exist, an existing
/// supplier without transactions gets an empty list.
pub async fn get_supplier_transactions_endpoint(
    PathParam(supplier_id): PathParam<SupplierId>,
    State(state): State<SupplierState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    get_supplier(supplier_id, &connection)?;

    get_transactions_by_supplier(supplier_id, &connection).map(Json)
}
