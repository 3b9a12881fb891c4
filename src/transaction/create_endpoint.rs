use axum::{Json, extract::State};

use crate::{
    Error,
    db::acquire_connection,
    extract::JsonBody,
    transaction::{Transaction, TransactionData, TransactionState, create_transaction},
};

/// A route handler for creating a new transaction, responds with the created
/// transaction including its ID.
///
/// A `supplier_id` that does not refer to a supplier is rejected with a 400
/// and nothing is stored.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    JsonBody(data): JsonBody<TransactionData>,
) -> Result<Json<Transaction>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    create_transaction(data, &connection).map(Json)
}
