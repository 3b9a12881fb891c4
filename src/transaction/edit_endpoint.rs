use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::TransactionId,
    db::acquire_connection,
    extract::{JsonBody, PathParam},
    transaction::{Transaction, TransactionData, TransactionState, update_transaction},
};

/// A route handler for replacing every field of a transaction, responds with
/// the updated transaction.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    PathParam(transaction_id): PathParam<TransactionId>,
    JsonBody(data): JsonBody<TransactionData>,
) -> Result<Json<Transaction>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    update_transaction(transaction_id, data, &connection).map(Json)
}
