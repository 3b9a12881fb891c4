use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::TransactionId,
    db::acquire_connection,
    extract::{PathParam, QueryParams},
    pagination::PaginationQuery,
    transaction::{Transaction, TransactionState, get_transaction, get_transactions},
};

/// A route handler for getting a transaction by its database ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    PathParam(transaction_id): PathParam<TransactionId>,
) -> Result<Json<Transaction>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    get_transaction(transaction_id, &connection).map(Json)
}

/// A route handler for listing transactions in the order they were created,
/// paged with the `skip` and `limit` query parameters.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
    QueryParams(query): QueryParams<PaginationQuery>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = acquire_connection(&state.db_connection)?;
    let page = state.pagination_config.page(query);

    get_transactions(page, &connection).map(Json)
}
