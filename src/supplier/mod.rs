//! Suppliers that transactions are bought from.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod get;
mod state;
mod transactions;

pub use create::create_supplier_endpoint;
pub use db::{
    create_supplier, create_supplier_table, delete_supplier, get_supplier, get_suppliers,
    update_supplier,
};
pub use delete::delete_supplier_endpoint;
pub use domain::{Supplier, SupplierData};
pub use edit::update_supplier_endpoint;
pub use get::{get_supplier_endpoint, get_suppliers_endpoint};
pub use state::SupplierState;
pub use transactions::get_supplier_transactions_endpoint;
