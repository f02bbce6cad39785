//! Risk classification of transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Transactions with an amount strictly greater than this are [Risk::High].
pub const HIGH_RISK_THRESHOLD: f64 = 5000.0;

/// The risk label assigned to a transaction when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Risk {
    /// The amount is above [HIGH_RISK_THRESHOLD].
    High,
    /// The amount is at or below [HIGH_RISK_THRESHOLD].
    Low,
}

/// Classify a transaction amount.
///
/// The threshold is exclusive, so an amount of exactly 5000 is [Risk::Low].
/// NaN is never greater than the threshold and is therefore also [Risk::Low].
pub fn classify(amount: f64) -> Risk {
    if amount > HIGH_RISK_THRESHOLD {
        Risk::High
    } else {
        Risk::Low
    }
}

impl Risk {
    /// The label stored in the database and sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::High => "HIGH",
            Risk::Low => "LOW",
        }
    }
}

impl Display for Risk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that is not one of the risk labels.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown risk label {0:?}")]
pub struct UnknownRiskLabel(String);

impl FromStr for Risk {
    type Err = UnknownRiskLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HIGH" => Ok(Risk::High),
            "LOW" => Ok(Risk::Low),
            other => Err(UnknownRiskLabel(other.to_owned())),
        }
    }
}

impl ToSql for Risk {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Risk {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}
