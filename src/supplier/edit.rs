//! Supplier update endpoint.

use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::SupplierId,
    db::acquire_connection,
    extract::{JsonBody, PathParam},
    supplier::{Supplier, SupplierData, SupplierState, update_supplier},
};

/// Replace every field of a supplier. Returns the updated supplier.
pub async fn update_supplier_endpoint(
    PathParam(supplier_id): PathParam<SupplierId>,
    State(state): State<SupplierState>,
    JsonBody(data): JsonBody<SupplierData>,
) -> Result<Json<Supplier>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    update_supplier(supplier_id, data, &connection).map(Json)
}
