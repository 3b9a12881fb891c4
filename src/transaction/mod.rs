//! Transaction management for the supplier ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionData` request body
//! - Database functions for storing, querying, and managing transactions
//! - The JSON endpoints for transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod state;

pub use core::{
    Transaction, TransactionData, count_transactions_for_supplier, create_transaction,
    create_transaction_table, delete_transaction, get_transaction, get_transactions,
    get_transactions_by_supplier, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::update_transaction_endpoint;
pub use get_endpoint::{get_transaction_endpoint, get_transactions_endpoint};
pub use state::TransactionState;
