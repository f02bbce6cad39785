//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{user_id}', use [format_endpoint].

/// The root route, used as a health check.
pub const ROOT: &str = "/";
/// The route for creating a transaction via the JSON API.
pub const TRANSACTION_API: &str = "/transaction";
/// The route for listing the transactions of a single user.
pub const USER_TRANSACTIONS_API: &str = "/transactions/{user_id}";
/// The page with the form for submitting a transaction, also the form's target.
pub const SUBMIT_TRANSACTION_VIEW: &str = "/submit-transaction";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
