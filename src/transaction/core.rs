//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row, ToSql, types::ToSqlOutput};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    risk::{Risk, classify},
};

// ============================================================================
// MODELS
// ============================================================================

/// Database identifier for a transaction.
pub type TransactionId = i64;

/// A validated, strictly positive user ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Create a user ID.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidUserId] if `id` is zero or negative.
    pub fn new(id: i64) -> Result<Self, Error> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(Error::InvalidUserId)
        }
    }

    /// The raw integer ID.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        UserId::new(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl ToSql for UserId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

/// A validated transaction amount: finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAmount] if `amount` is
    /// zero, negative, NaN or infinite.
    pub fn new(amount: f64) -> Result<Self, Error> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(Error::InvalidAmount)
        }
    }

    /// The raw amount.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

/// A transaction that has been validated and classified but not yet stored.
///
/// The only way to build one is [NewTransaction::new], so the risk always
/// matches the amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewTransaction {
    user_id: UserId,
    amount: Amount,
    risk: Risk,
}

impl NewTransaction {
    /// Validate the raw inputs and classify the amount.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidUserId] if `user_id` is not positive,
    /// - or [Error::InvalidAmount] if `amount` is not a positive number.
    pub fn new(user_id: i64, amount: f64) -> Result<Self, Error> {
        let user_id = UserId::new(user_id)?;
        let amount = Amount::new(amount)?;

        Ok(Self::from_parts(user_id, amount))
    }

    /// Classify an already validated amount.
    pub fn from_parts(user_id: UserId, amount: Amount) -> Self {
        Self {
            user_id,
            amount,
            risk: classify(amount.get()),
        }
    }

    /// The ID of the user the transaction belongs to.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The transaction amount.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The risk derived from the amount.
    pub fn risk(&self) -> Risk {
        self.risk
    }
}

/// A stored transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the database.
    pub id: TransactionId,
    /// The ID of the user that made the transaction.
    pub user_id: i64,
    /// The amount of money in the transaction.
    pub amount: f64,
    /// The risk label assigned when the transaction was created.
    pub risk: Risk,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a new transaction and return the stored record.
///
/// # Errors
/// This function will return an [Error::Storage] if there is an SQL error.
pub fn create_transaction(
    transaction: &NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (user_id, amount, risk)
             VALUES (?1, ?2, ?3)
             RETURNING id, user_id, amount, risk",
        )?
        .query_row(
            (transaction.user_id, transaction.amount, transaction.risk),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Get all transactions for `user_id` in the order they were created.
///
/// An empty vector is returned if the user has no transactions.
///
/// # Errors
/// This function will return an [Error::Storage] if there is an SQL error.
pub fn get_transactions_by_user(
    user_id: UserId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let mut statement = connection.prepare(
        "SELECT id, user_id, amount, risk FROM transactions
         WHERE user_id = :user_id
         ORDER BY id ASC",
    )?;

    let transactions = statement
        .query_map(&[(":user_id", &user_id)], map_transaction_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(transactions)
}

/// Create the transaction table in the database if it does not exist.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER,
                amount REAL,
                risk TEXT
                )",
        (),
    )?;

    // Looking up transactions by user is the only query.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_user_id ON transactions(user_id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let user_id = row.get(1)?;
    let amount = row.get(2)?;
    let risk = row.get(3)?;

    Ok(Transaction {
        id,
        user_id,
        amount,
        risk,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod model_tests {
    use crate::{
        Error, Risk,
        transaction::{Amount, NewTransaction, UserId},
    };

    #[test]
    fn user_id_must_be_positive() {
        assert_eq!(UserId::new(0), Err(Error::InvalidUserId));
        assert_eq!(UserId::new(-1), Err(Error::InvalidUserId));
        assert_eq!(UserId::new(1).map(|id| id.get()), Ok(1));
    }

    #[test]
    fn amount_must_be_positive_and_finite() {
        for amount in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(Amount::new(amount), Err(Error::InvalidAmount), "{amount}");
        }

        assert_eq!(Amount::new(0.01).map(|amount| amount.get()), Ok(0.01));
    }

    #[test]
    fn new_transaction_derives_risk_from_amount() {
        let low = NewTransaction::new(1, 5000.0).unwrap();
        let high = NewTransaction::new(1, 5000.5).unwrap();

        assert_eq!(low.risk(), Risk::Low);
        assert_eq!(high.risk(), Risk::High);
    }

    #[test]
    fn new_transaction_checks_user_id_before_amount() {
        assert_eq!(NewTransaction::new(0, -5.0), Err(Error::InvalidUserId));
        assert_eq!(NewTransaction::new(3, -5.0), Err(Error::InvalidAmount));
    }

    #[test]
    fn user_id_deserialization_is_validated() {
        assert!(serde_json::from_str::<UserId>("0").is_err());
        assert_eq!(serde_json::from_str::<UserId>("7").unwrap().get(), 7);
    }
}
