use axum::{Json, extract::State};

use crate::{
    Error, Message,
    database_id::TransactionId,
    db::acquire_connection,
    extract::PathParam,
    transaction::{TransactionState, delete_transaction},
};

/// A route handler for deleting a transaction, responds with a confirmation message.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    PathParam(transaction_id): PathParam<TransactionId>,
) -> Result<Json<Message>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    delete_transaction(transaction_id, &connection)?;

    Ok(Message::new("Transaction deleted successfully"))
}
