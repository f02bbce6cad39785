//! Defines the JSON endpoint for listing a user's transactions.
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    db::Database,
    transaction::{Transaction, UserId, get_transactions_by_user},
};

/// The JSON body listing the transactions of one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTransactionsResponse {
    /// The user the transactions belong to.
    pub user_id: i64,
    /// The user's transactions, oldest first. Empty if the user has none.
    pub transactions: Vec<Transaction>,
}

/// A route handler for getting all transactions of the user in the path.
pub async fn get_user_transactions_endpoint(
    State(database): State<Database>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserTransactionsResponse>, Error> {
    let Path(user_id) = user_id.map_err(|rejection| {
        tracing::debug!("rejected user ID path: {rejection}");
        Error::InvalidRequest(rejection.body_text())
    })?;
    let user_id = UserId::new(user_id)?;

    let transactions = database
        .with_connection(|connection| get_transactions_by_user(user_id, connection))
        .inspect_err(|error| {
            tracing::error!(
                "could not get transactions for user {}: {error}",
                user_id.get()
            )
        })?;

    Ok(Json(UserTransactionsResponse {
        user_id: user_id.get(),
        transactions,
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::{Path, State},
    };
    use tempfile::TempDir;

    use crate::{
        Error, Risk,
        db::Database,
        transaction::{
            NewTransaction, Transaction, create_transaction, get_user_transactions_endpoint,
            list_endpoint::UserTransactionsResponse,
        },
    };

    fn get_test_database() -> (TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let database = Database::new(dir.path().join("transactions.db"));
        (dir, database)
    }

    fn insert(database: &Database, user_id: i64, amount: f64) -> Transaction {
        database
            .with_connection(|conn| {
                create_transaction(&NewTransaction::new(user_id, amount).unwrap(), conn)
            })
            .unwrap()
    }

    async fn get(
        database: &Database,
        user_id: i64,
    ) -> Result<Json<UserTransactionsResponse>, Error> {
        get_user_transactions_endpoint(State(database.clone()), Ok(Path(user_id))).await
    }

    #[tokio::test]
    async fn lists_transactions_for_user() {
        let (_dir, database) = get_test_database();
        let first = insert(&database, 1, 100.0);
        insert(&database, 2, 50.0);
        let second = insert(&database, 1, 7500.0);

        let Json(response) = get(&database, 1).await.unwrap();

        assert_eq!(
            response,
            UserTransactionsResponse {
                user_id: 1,
                transactions: vec![first, second],
            }
        );
        assert_eq!(response.transactions[0].risk, Risk::Low);
        assert_eq!(response.transactions[1].risk, Risk::High);
    }

    #[tokio::test]
    async fn user_without_transactions_gets_empty_list() {
        let (_dir, database) = get_test_database();

        let Json(response) = get(&database, 5).await.unwrap();

        assert_eq!(response.user_id, 5);
        assert!(response.transactions.is_empty());
    }

    #[tokio::test]
    async fn rejects_non_positive_user_id() {
        let (_dir, database) = get_test_database();

        assert_eq!(get(&database, 0).await.unwrap_err(), Error::InvalidUserId);
        assert_eq!(get(&database, -4).await.unwrap_err(), Error::InvalidUserId);
    }

    #[tokio::test]
    async fn storage_failure_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let database = Database::new(dir.path().join("missing_dir").join("transactions.db"));

        let result = get(&database, 1).await;

        assert!(
            matches!(result, Err(Error::Storage(_))),
            "want storage error, got {result:?}"
        );
    }
}
