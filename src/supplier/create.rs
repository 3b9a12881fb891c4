//! Supplier creation endpoint.

use axum::{Json, extract::State};

use crate::{
    Error,
    db::acquire_connection,
    extract::JsonBody,
    supplier::{Supplier, SupplierData, SupplierState, create_supplier},
};

/// Handle a request to create a supplier. Returns the supplier with its new ID.
pub async fn create_supplier_endpoint(
    State(state): State<SupplierState>,
    JsonBody(data): JsonBody<SupplierData>,
) -> Result<Json<Supplier>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    let supplier = create_supplier(data, &connection)?;

    Ok(Json(supplier))
}
