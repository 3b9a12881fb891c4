//! Supplier deletion endpoint.

use axum::{Json, extract::State};

use crate::{
    Error, Message,
    database_id::SupplierId,
    db::acquire_connection,
    extract::PathParam,
    supplier::{SupplierState, delete_supplier},
};

/// Handle supplier deletion. Refused while the supplier has transactions.
pub async fn delete_supplier_endpoint(
    PathParam(supplier_id): PathParam<SupplierId>,
    State(state): State<SupplierState>,
) -> Result<Json<Message>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    delete_supplier(supplier_id, &connection)?;

    Ok(Message::new("Supplier deleted successfully"))
}
