//! Cross-frame message routing: origin policy plus message-to-action mapping.

use desktop_app_contract::{FrameMessage, FrameMessageError};
use platform_host::{url_origin, FrameConfig};
use serde_json::Value;

use crate::{model::WindowKind, reducer::DesktopAction};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Origins allowed to message the shell: its own origin plus configured frame origins.
pub struct FrameOriginPolicy {
    allowed: Vec<String>,
}

impl FrameOriginPolicy {
    /// Builds the policy from the shell origin and frame configuration.
    ///
    /// The game frame's origin is always allowed when its source is an absolute URL.
    pub fn new(shell_origin: Option<String>, frames: &FrameConfig) -> Self {
        let mut allowed: Vec<String> = Vec::new();
        let candidates = shell_origin
            .into_iter()
            .chain(frames.allowed_origins.iter().cloned())
            .chain(url_origin(&frames.game_src));
        for origin in candidates {
            let origin = origin.trim_end_matches('/').to_string();
            if !origin.is_empty() && !allowed.contains(&origin) {
                allowed.push(origin);
            }
        }
        Self { allowed }
    }

    pub fn accepts(&self, origin: &str) -> bool {
        self.allowed.iter().any(|allowed| allowed == origin)
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

/// Maps a decoded frame message to reducer actions.
pub fn route_frame_message(message: FrameMessage) -> Vec<DesktopAction> {
    match message {
        FrameMessage::LoginSuccess { user, session_id } => {
            vec![DesktopAction::SessionEstablished { user, session_id }]
        }
        FrameMessage::SwitchToLogin => vec![
            DesktopAction::HideWindow(WindowKind::Register),
            DesktopAction::ShowWindow(WindowKind::Login),
        ],
        FrameMessage::Logout => vec![DesktopAction::Logout],
        FrameMessage::RequestSession | FrameMessage::AuthFailed => vec![DesktopAction::AuthFailed],
        FrameMessage::GameReady => vec![connection("Connected to Game", true)],
        FrameMessage::BabylonReady => vec![connection("Babylon.js Scene Loaded", true)],
        FrameMessage::BabylonError => vec![connection("Babylon.js Error", false)],
        FrameMessage::UpdateStatus { message, status } => {
            let connected = status == "success";
            vec![DesktopAction::SetConnectionStatus { message, connected }]
        }
        // Shell-to-frame only.
        FrameMessage::SessionId { .. } => Vec::new(),
    }
}

fn connection(message: &str, connected: bool) -> DesktopAction {
    DesktopAction::SetConnectionStatus {
        message: message.to_string(),
        connected,
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Outcome of routing one `message` event.
pub enum RouteOutcome {
    /// Sender origin is not allowed.
    Rejected {
        /// Offending origin.
        origin: String,
    },
    /// Payload is not part of the vocabulary.
    Ignored(FrameMessageError),
    /// Actions to dispatch, in order.
    Dispatch(Vec<DesktopAction>),
}

/// Checks the sender origin, decodes the payload, and maps it to actions.
pub fn route_incoming(policy: &FrameOriginPolicy, origin: &str, payload: Value) -> RouteOutcome {
    if !policy.accepts(origin) {
        return RouteOutcome::Rejected {
            origin: origin.to_string(),
        };
    }
    match FrameMessage::decode(payload) {
        Ok(message) => RouteOutcome::Dispatch(route_frame_message(message)),
        Err(err) => RouteOutcome::Ignored(err),
    }
}
