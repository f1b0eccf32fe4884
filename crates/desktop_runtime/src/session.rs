//! Startup session check and backend logout.

use leptos::logging;
use platform_host::{
    ApiError, ApiRequest, ApiResponse, AuthEnvelope, BackendApi, BackendEndpoint,
};

use crate::reducer::DesktopAction;

/// Asks the backend whether the browser already holds a session.
pub async fn check_existing_session(api: &dyn BackendApi) -> DesktopAction {
    interpret_session_check(api.send(ApiRequest::new(BackendEndpoint::SessionTokens)).await)
}

/// Maps a session-check outcome to the action that settles boot.
///
/// Only a 2xx response whose body has `success: true` and a user counts as a session.
pub fn interpret_session_check(result: Result<ApiResponse, ApiError>) -> DesktopAction {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            logging::error!("Session check failed: {err}");
            return DesktopAction::SessionRejected;
        }
    };
    if !response.is_ok() {
        return DesktopAction::SessionRejected;
    }
    match response.json::<AuthEnvelope>() {
        Ok(AuthEnvelope {
            success: true,
            user: Some(user),
            ..
        }) => DesktopAction::SessionEstablished {
            user: Some(user),
            session_id: None,
        },
        Ok(_) => DesktopAction::SessionRejected,
        Err(err) => {
            logging::warn!("Session check body did not decode: {err}");
            DesktopAction::SessionRejected
        }
    }
}

/// Tells the backend to end the session. Failures are logged and otherwise ignored.
pub async fn notify_logout(api: &dyn BackendApi) {
    if let Err(err) = api.send(ApiRequest::new(BackendEndpoint::Logout)).await {
        logging::error!("Logout error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryBackendApi, User};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn successful_check_with_user_establishes_session() {
        let api = MemoryBackendApi::default();
        api.respond(
            BackendEndpoint::SessionTokens,
            Ok(ApiResponse::new(
                200,
                json!({ "success": true, "user": { "id": 3, "username": "ada", "email": "a@x" } }),
            )),
        );
        let action = block_on(check_existing_session(&api));
        assert_eq!(
            action,
            DesktopAction::SessionEstablished {
                user: Some(User {
                    id: 3,
                    username: "ada".to_string(),
                    email: "a@x".to_string(),
                    wallet_address: None,
                }),
                session_id: None,
            }
        );
    }

    #[test]
    fn everything_else_rejects_the_session() {
        let cases = [
            Ok(ApiResponse::new(401, json!({ "success": true, "user": { "id": 1 } }))),
            Ok(ApiResponse::new(200, json!({ "success": false }))),
            Ok(ApiResponse::new(200, json!({ "success": true }))),
            Ok(ApiResponse::new(200, json!(null))),
            Err(ApiError::Network("offline".to_string())),
        ];
        for case in cases {
            assert_eq!(interpret_session_check(case), DesktopAction::SessionRejected);
        }
    }

    #[test]
    fn logout_ignores_backend_failure() {
        let api = MemoryBackendApi::default();
        block_on(notify_logout(&api));
        assert_eq!(api.requests().len(), 1);
        assert_eq!(api.requests()[0].endpoint, BackendEndpoint::Logout);
    }
}
