//! Login submission against the backend.

use desktop_app_contract::FrameMessage;
use leptos::logging;
use platform_host::{ApiRequest, AuthEnvelope, BackendApi, BackendEndpoint};
use serde_json::json;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Submits trimmed credentials and returns the message to post to the shell on success.
///
/// # Errors
///
/// Returns the text to show in the error slot: the server's message, [`LOGIN_FAILED_MESSAGE`],
/// or [`NETWORK_ERROR_MESSAGE`] when the request never produced a response.
pub async fn submit_login(
    api: &dyn BackendApi,
    email: &str,
    password: &str,
) -> Result<FrameMessage, String> {
    let body = json!({ "email": email.trim(), "password": password.trim() });
    let request = ApiRequest::with_json(BackendEndpoint::Login, &body).map_err(|err| {
        logging::error!("Login error: {err}");
        NETWORK_ERROR_MESSAGE.to_string()
    })?;

    let response = api.send(request).await.map_err(|err| {
        logging::error!("Login error: {err}");
        NETWORK_ERROR_MESSAGE.to_string()
    })?;

    if !response.is_ok() {
        return Err(response
            .message()
            .unwrap_or(LOGIN_FAILED_MESSAGE)
            .to_string());
    }

    let user = response
        .json::<AuthEnvelope>()
        .ok()
        .and_then(|envelope| envelope.user);
    Ok(FrameMessage::LoginSuccess {
        user,
        session_id: None,
    })
}
