//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    health::get_health,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, get_submit_transaction_page, get_user_transactions_endpoint,
        submit_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_health))
        .route(endpoints::TRANSACTION_API, post(create_transaction_endpoint))
        .route(
            endpoints::USER_TRANSACTIONS_API,
            get(get_user_transactions_endpoint),
        )
        .route(
            endpoints::SUBMIT_TRANSACTION_VIEW,
            get(get_submit_transaction_page).post(submit_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}
