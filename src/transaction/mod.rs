//! Transaction ingestion and retrieval.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated inputs for creating one
//! - Database functions for storing and querying transactions
//! - The JSON API handlers and the HTML form handlers

mod core;
mod create_endpoint;
mod list_endpoint;
mod submit_page;

pub use core::{
    Amount, NewTransaction, Transaction, TransactionId, UserId, create_transaction,
    create_transaction_table, get_transactions_by_user, map_transaction_row,
};
pub use create_endpoint::{
    CreateTransactionRequest, CreateTransactionResponse, create_transaction_endpoint,
};
pub use list_endpoint::{UserTransactionsResponse, get_user_transactions_endpoint};
pub use submit_page::{get_submit_transaction_page, submit_transaction_endpoint};
