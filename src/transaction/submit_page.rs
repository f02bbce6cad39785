//! Defines the HTML form for submitting a transaction and the route handler it posts to.
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of rejecting the whole form like axum::Form.
use axum_extra::extract::{Form, FormRejection};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    db::Database,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, base,
    },
    transaction::{NewTransaction, Transaction, create_transaction},
};

fn submit_transaction_view() -> Markup {
    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form
                method="post"
                action=(endpoints::SUBMIT_TRANSACTION_VIEW)
            {
                h2 { "Submit Transaction" }

                div
                {
                    label
                        for="user_id"
                        class=(FORM_LABEL_STYLE)
                    {
                        "User ID"
                    }

                    input
                        name="user_id"
                        id="user_id"
                        type="number"
                        min="1"
                        step="1"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount"
                    }

                    input
                        name="amount"
                        id="amount"
                        type="number"
                        min="0.01"
                        step="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Submit"
                }
            }
        }
    };

    base("Submit Transaction", &content)
}

fn transaction_submitted_view(transaction: &Transaction) -> Markup {
    html! {
        h3 { "Transaction Submitted!" }
        p { "User ID: " (transaction.user_id) }
        p { "Amount: " (transaction.amount) }
        p { "Risk: " (transaction.risk) }
        a href=(endpoints::SUBMIT_TRANSACTION_VIEW) class=(LINK_STYLE) { "Submit another" }
    }
}

/// Renders the page with the form for submitting a transaction.
pub async fn get_submit_transaction_page() -> Response {
    submit_transaction_view().into_response()
}

/// The form data for submitting a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitTransactionForm {
    /// The ID of the user making the transaction.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// The amount of the transaction.
    #[serde(default)]
    pub amount: Option<f64>,
}

/// A route handler for the transaction form, responds with an HTML fragment.
pub async fn submit_transaction_endpoint(
    State(database): State<Database>,
    form: Result<Form<SubmitTransactionForm>, FormRejection>,
) -> Response {
    let new_transaction = match form {
        Ok(Form(SubmitTransactionForm {
            user_id: Some(user_id),
            amount: Some(amount),
        })) => NewTransaction::new(user_id, amount),
        Ok(Form(form)) => Err(Error::InvalidRequest(format!(
            "missing form fields in {form:?}"
        ))),
        Err(rejection) => Err(Error::InvalidRequest(rejection.to_string())),
    };

    let new_transaction = match new_transaction {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::debug!("rejected transaction form: {error}");
            return error.into_html_response();
        }
    };

    match database.with_connection(|connection| create_transaction(&new_transaction, connection)) {
        Ok(transaction) => {
            tracing::info!(
                "created transaction {} for user {} with {} risk",
                transaction.id,
                transaction.user_id,
                transaction.risk
            );

            (StatusCode::OK, transaction_submitted_view(&transaction)).into_response()
        }
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            error.into_html_response()
        }
    }
}

#[cfg(test)]
mod view_tests {
    use crate::{
        endpoints,
        test_utils::{
            assert_content_type, assert_form_attribute, assert_form_input,
            assert_form_submit_button, assert_status_ok, assert_valid_html, must_get_form,
            parse_html_document,
        },
        transaction::get_submit_transaction_page,
    };

    #[tokio::test]
    async fn submit_page_returns_form() {
        let response = get_submit_transaction_page().await;

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);

        let form = must_get_form(&document);
        assert_form_attribute(&form, "action", endpoints::SUBMIT_TRANSACTION_VIEW);
        assert_form_attribute(&form, "method", "post");
        assert_form_input(&form, "user_id", "number");
        assert_form_input(&form, "amount", "number");
        assert_form_submit_button(&form);
    }
}
