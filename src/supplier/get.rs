//! Endpoints for reading one or many suppliers.

use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::SupplierId,
    db::acquire_connection,
    extract::{PathParam, QueryParams},
    pagination::PaginationQuery,
    supplier::{Supplier, SupplierState, get_supplier, get_suppliers},
};

/// Get a single supplier by ID.
pub async fn get_supplier_endpoint(
    PathParam(supplier_id): PathParam<SupplierId>,
    State(state): State<SupplierState>,
) -> Result<Json<Supplier>, Error> {
    let connection = acquire_connection(&state.db_connection)?;

    get_supplier(supplier_id, &connection).map(Json)
}

/// List suppliers in the order they were created, paged with `skip` and `limit`.
pub async fn get_suppliers_endpoint(
    State(state): State<SupplierState>,
    QueryParams(query): QueryParams<PaginationQuery>,
) -> Result<Json<Vec<Supplier>>, Error> {
    let connection = acquire_connection(&state.db_connection)?;
    let page = state.pagination_config.page(query);

    get_suppliers(page, &connection).map(Json)
}

#[cfg(test)]
mod get_supplier_endpoint_tests {
    use axum::{Json, extract::State};

    use crate::{
        Error, PaginationConfig,
        extract::{PathParam, QueryParams},
        pagination::PaginationQuery,
        supplier::{
            SupplierData, SupplierState, create_supplier, get_supplier_endpoint,
            get_suppliers_endpoint,
        },
        test_utils::get_test_db_connection,
    };

    fn get_supplier_state() -> SupplierState {
        SupplierState {
            db_connection: get_test_db_connection(),
            pagination_config: PaginationConfig { default_limit: 2 },
        }
    }

    fn insert_suppliers(state: &SupplierState, count: usize) {
        let connection = state.db_connection.lock().unwrap();

        for i in 0..count {
            create_supplier(
                SupplierData {
                    supplier_name: format!("Supplier {i}"),
                    supplier_contact_person: "Bob".to_owned(),
                    supplier_contact_number: "555-0100".to_owned(),
                },
                &connection,
            )
            .expect("Could not create test supplier");
        }
    }

    #[tokio::test]
    async fn get_supplier_succeeds() {
        let state = get_supplier_state();
        insert_suppliers(&state, 1);

        let Json(supplier) = get_supplier_endpoint(PathParam(1), State(state))
            .await
            .expect("Could not get supplier");

        assert_eq!(supplier.id, 1);
        assert_eq!(supplier.supplier_name, "Supplier 0");
    }

    #[tokio::test]
    async fn get_missing_supplier_returns_not_found() {
        let state = get_supplier_state();

        let result = get_supplier_endpoint(PathParam(42), State(state)).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn list_uses_default_limit() {
        let state = get_supplier_state();
        insert_suppliers(&state, 3);

        let Json(suppliers) = get_suppliers_endpoint(State(state), QueryParams(PaginationQuery::default()))
            .await
            .expect("Could not list suppliers");

        let ids: Vec<_> = suppliers.iter().map(|supplier| supplier.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn list_respects_skip_and_limit() {
        let state = get_supplier_state();
        insert_suppliers(&state, 3);

        let Json(suppliers) = get_suppliers_endpoint(
            State(state),
            QueryParams(PaginationQuery {
                skip: Some(1),
                limit: Some(1),
            }),
        )
        .await
        .expect("Could not list suppliers");

        let ids: Vec<_> = suppliers.iter().map(|supplier| supplier.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
