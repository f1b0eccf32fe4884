//! Shared cross-frame contract between the desktop shell and the programs it hosts in iframes.
//!
//! Frames and the shell share no memory; everything they exchange is a [`FrameMessage`] encoded
//! as a JSON object tagged by its `type` field and posted with `window.postMessage`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use platform_host::ParentFrameService;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use platform_host::User;

/// Every `type` tag in the cross-frame vocabulary.
pub const FRAME_MESSAGE_TYPES: [&str; 10] = [
    "LOGIN_SUCCESS",
    "SWITCH_TO_LOGIN",
    "LOGOUT",
    "REQUEST_SESSION",
    "AUTH_FAILED",
    "GAME_READY",
    "BABYLON_READY",
    "BABYLON_ERROR",
    "UPDATE_STATUS",
    "SESSION_ID",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
/// Message exchanged between the shell and its framed programs.
pub enum FrameMessage {
    /// A frame authenticated the user (login or registration).
    LoginSuccess {
        /// Authenticated user.
        #[serde(default)]
        user: Option<User>,
        /// Backend session id, when the frame could read it.
        #[serde(
            default,
            rename = "sessionId",
            skip_serializing_if = "Option::is_none"
        )]
        session_id: Option<String>,
    },
    /// The register frame asks the shell to show the login frame instead.
    SwitchToLogin,
    /// A frame asks the shell to log out.
    Logout,
    /// A frame asks the shell to (re)establish the session; treated as an auth failure.
    RequestSession,
    /// A frame reports that its authentication was rejected.
    AuthFailed,
    /// The game frame finished booting.
    GameReady,
    /// The game frame's scene finished loading.
    BabylonReady,
    /// The game frame's scene failed to load.
    BabylonError,
    /// Free-form connection status update from the game frame.
    UpdateStatus {
        /// Status text.
        #[serde(default)]
        message: String,
        /// `success` marks the connection healthy; anything else marks it down.
        #[serde(default)]
        status: String,
    },
    /// Shell to frame: the current backend session id.
    SessionId {
        /// Backend session id.
        #[serde(rename = "sessionId")]
        session_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons an incoming payload is not a [`FrameMessage`].
pub enum FrameMessageError {
    /// The payload is not an object with a string `type` field.
    #[error("message has no string `type` field")]
    MissingType,
    /// The `type` tag is outside the vocabulary.
    #[error("unknown message type `{0}`")]
    Unknown(String),
    /// The tag is known but the fields do not match.
    #[error("malformed `{kind}` message: {reason}")]
    Malformed {
        /// Message type tag.
        kind: String,
        /// Decoder failure.
        reason: String,
    },
}

impl FrameMessage {
    /// Decodes an incoming payload.
    ///
    /// # Errors
    ///
    /// Returns a [`FrameMessageError`] describing why the payload was rejected.
    pub fn decode(payload: Value) -> Result<Self, FrameMessageError> {
        let kind = payload
            .get("type")
            .and_then(Value::as_str)
            .ok_or(FrameMessageError::MissingType)?
            .to_string();
        if !FRAME_MESSAGE_TYPES.contains(&kind.as_str()) {
            return Err(FrameMessageError::Unknown(kind));
        }
        serde_json::from_value(payload).map_err(|err| FrameMessageError::Malformed {
            kind,
            reason: err.to_string(),
        })
    }

    /// Returns the message `type` tag.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoginSuccess { .. } => "LOGIN_SUCCESS",
            Self::SwitchToLogin => "SWITCH_TO_LOGIN",
            Self::Logout => "LOGOUT",
            Self::RequestSession => "REQUEST_SESSION",
            Self::AuthFailed => "AUTH_FAILED",
            Self::GameReady => "GAME_READY",
            Self::BabylonReady => "BABYLON_READY",
            Self::BabylonError => "BABYLON_ERROR",
            Self::UpdateStatus { .. } => "UPDATE_STATUS",
            Self::SessionId { .. } => "SESSION_ID",
        }
    }

    /// Encodes the message as a JSON object.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({ "type": self.kind() }))
    }
}

/// Posts `message` to the window embedding the current frame.
///
/// # Errors
///
/// Returns the host error when there is no parent or the post fails.
pub fn post_to_parent(
    parent: &dyn ParentFrameService,
    message: &FrameMessage,
) -> Result<(), String> {
    parent.post_to_parent(&message.to_value())
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryParentFrame;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn login_success_round_trips_camel_case_session_id() {
        let message = FrameMessage::decode(json!({
            "type": "LOGIN_SUCCESS",
            "user": { "id": 7, "username": "marvin", "email": "m@example.test" },
            "sessionId": "s-1"
        }))
        .expect("decode");
        let FrameMessage::LoginSuccess { user, session_id } = &message else {
            panic!("expected LOGIN_SUCCESS, got {message:?}");
        };
        assert_eq!(user.as_ref().map(|u| u.username.as_str()), Some("marvin"));
        assert_eq!(session_id.as_deref(), Some("s-1"));
        assert_eq!(message.to_value()["sessionId"], json!("s-1"));
    }

    #[test]
    fn unit_messages_ignore_extra_fields() {
        assert_eq!(
            FrameMessage::decode(json!({ "type": "GAME_READY", "ts": 1 })),
            Ok(FrameMessage::GameReady)
        );
        assert_eq!(
            FrameMessage::SwitchToLogin.to_value(),
            json!({ "type": "SWITCH_TO_LOGIN" })
        );
    }

    #[test]
    fn decode_classifies_rejections() {
        assert_eq!(
            FrameMessage::decode(json!("LOGOUT")),
            Err(FrameMessageError::MissingType)
        );
        assert_eq!(
            FrameMessage::decode(json!({ "type": "PING" })),
            Err(FrameMessageError::Unknown("PING".to_string()))
        );
        assert!(matches!(
            FrameMessage::decode(json!({ "type": "SESSION_ID" })),
            Err(FrameMessageError::Malformed { kind, .. }) if kind == "SESSION_ID"
        ));
    }

    #[test]
    fn update_status_defaults_missing_fields() {
        assert_eq!(
            FrameMessage::decode(json!({ "type": "UPDATE_STATUS", "message": "Loading" })),
            Ok(FrameMessage::UpdateStatus {
                message: "Loading".to_string(),
                status: String::new(),
            })
        );
    }

    #[test]
    fn post_to_parent_sends_encoded_message() {
        let parent = MemoryParentFrame::default();
        post_to_parent(&parent, &FrameMessage::Logout).expect("post");
        assert_eq!(parent.posted(), vec![json!({ "type": "LOGOUT" })]);
    }
}
