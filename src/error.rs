//! Defines the app level error type and its conversions to JSON and HTML responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use serde_json::json;

use crate::{endpoints, html::LINK_STYLE};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A user ID was zero or negative.
    #[error("Invalid user_id")]
    InvalidUserId,

    /// A transaction amount was zero, negative or not a finite number.
    #[error("Invalid amount, amount must be greater than 0")]
    InvalidAmount,

    /// The request body or path could not be turned into the expected input.
    ///
    /// The string is the reason given by the extractor or validation step.
    #[error("{0}")]
    InvalidRequest(String),

    /// No route matches the requested path.
    #[error("Not Found")]
    NotFound,

    /// The database could not be opened, initialized or queried.
    ///
    /// The underlying error message is passed on to the client as is.
    #[error("Database error: {0}")]
    Storage(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an SQL error occurred: {error}");
        Error::Storage(error)
    }
}

impl Error {
    /// The HTTP status code used when this error is sent to a JSON API client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidUserId | Error::InvalidAmount => StatusCode::BAD_REQUEST,
            Error::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as an HTML fragment for the transaction form.
    pub fn into_html_response(self) -> Response {
        match self {
            Error::InvalidUserId | Error::InvalidAmount | Error::InvalidRequest(_) => (
                StatusCode::BAD_REQUEST,
                html! {
                    h3 { "Invalid input. User ID and Amount must be positive." }
                    a href=(endpoints::SUBMIT_TRANSACTION_VIEW) class=(LINK_STYLE) { "Go back" }
                },
            )
                .into_response(),
            Error::NotFound => (StatusCode::NOT_FOUND, html! { h3 { (self) } }).into_response(),
            error @ Error::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                html! { h3 { (error) } },
            )
                .into_response(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
