//! Application router configuration. Every route sits behind the basic auth gate.

use axum::{
    Router, middleware,
    routing::get,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::{
    AppState, Error,
    auth::auth_guard,
    endpoints,
    supplier::{
        create_supplier_endpoint, delete_supplier_endpoint, get_supplier_endpoint,
        get_supplier_transactions_endpoint, get_suppliers_endpoint, update_supplier_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        get_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    // Browsers only send the preflight without credentials, so CORS has to
    // answer before the auth gate sees the request.
    let cors_layer = CorsLayer::new()
        .allow_origin(state.allowed_origin.clone())
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::SUPPLIERS,
            get(get_suppliers_endpoint).post(create_supplier_endpoint),
        )
        .route(
            endpoints::SUPPLIER,
            get(get_supplier_endpoint)
                .put(update_supplier_endpoint)
                .delete(delete_supplier_endpoint),
        )
        .route(
            endpoints::SUPPLIER_TRANSACTIONS,
            get(get_supplier_transactions_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard))
        .layer(cors_layer)
        .with_state(state)
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}
