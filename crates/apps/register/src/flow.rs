//! Registration submission against the backend.

use desktop_app_contract::FrameMessage;
use leptos::logging;
use platform_host::{ApiRequest, AuthEnvelope, BackendApi, BackendEndpoint, CookieReader, User};
use serde::Serialize;

use crate::password::validate_registration;

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful! Logging you in...";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Registration form fields, serialized as the register request body.
pub struct RegistrationForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Returns a copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
            confirm_password: self.confirm_password.trim().to_string(),
        }
    }
}

/// Validates and submits `form`, returning the registered user on success.
///
/// # Errors
///
/// Returns the text to show in the error slot: a password policy message, the server's message,
/// [`REGISTRATION_FAILED_MESSAGE`], or [`NETWORK_ERROR_MESSAGE`].
pub async fn submit_registration(
    api: &dyn BackendApi,
    form: &RegistrationForm,
) -> Result<Option<User>, String> {
    let form = form.trimmed();
    validate_registration(&form.password, &form.confirm_password).map_err(|err| err.to_string())?;

    let request = ApiRequest::with_json(BackendEndpoint::Register, &form).map_err(|err| {
        logging::error!("Registration error: {err}");
        NETWORK_ERROR_MESSAGE.to_string()
    })?;
    let response = api.send(request).await.map_err(|err| {
        logging::error!("Registration error: {err}");
        NETWORK_ERROR_MESSAGE.to_string()
    })?;

    if !(response.is_ok() && response.success_flag()) {
        return Err(response
            .message()
            .unwrap_or(REGISTRATION_FAILED_MESSAGE)
            .to_string());
    }

    Ok(response
        .json::<AuthEnvelope>()
        .ok()
        .and_then(|envelope| envelope.user))
}

/// Builds the hand-off message, reading the session id from the `cookie_name` cookie now.
///
/// Called when the message is posted rather than when the response arrives, so a cookie set
/// by the registration response is visible.
pub fn login_success_message(
    user: Option<User>,
    cookies: &dyn CookieReader,
    cookie_name: &str,
) -> FrameMessage {
    FrameMessage::LoginSuccess {
        user,
        session_id: cookies.cookie(cookie_name),
    }
}
