//! Defines the JSON endpoint for creating a new transaction.
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    db::Database,
    risk::Risk,
    transaction::{NewTransaction, create_transaction},
};

/// The JSON body for creating a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// The ID of the user making the transaction, must be greater than zero.
    pub user_id: i64,
    /// The amount of the transaction, must be greater than zero.
    pub amount: f64,
}

/// The JSON body returned after a transaction has been stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    /// The ID of the user making the transaction.
    pub user_id: i64,
    /// The amount of the transaction.
    pub amount: f64,
    /// The risk assigned to the transaction.
    pub risk: Risk,
}

/// A route handler for creating a new transaction from a JSON body.
///
/// Bodies that cannot be parsed or that contain a non-positive user ID or
/// amount are rejected with 422 Unprocessable Entity before anything is stored.
pub async fn create_transaction_endpoint(
    State(database): State<Database>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<Json<CreateTransactionResponse>, Error> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("rejected transaction body: {rejection}");
        Error::InvalidRequest(rejection.body_text())
    })?;

    let new_transaction = NewTransaction::new(request.user_id, request.amount)
        .map_err(|error| Error::InvalidRequest(error.to_string()))?;

    let transaction = database
        .with_connection(|connection| create_transaction(&new_transaction, connection))
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

    tracing::info!(
        "created transaction {} for user {} with {} risk",
        transaction.id,
        transaction.user_id,
        transaction.risk
    );

    Ok(Json(CreateTransactionResponse {
        user_id: transaction.user_id,
        amount: transaction.amount,
        risk: transaction.risk,
    }))
}
