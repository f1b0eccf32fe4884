//! Typed shell configuration embedded from `shell.config.toml` at build time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/shell_config_generated.rs"));
}

pub use generated::SHELL_CONFIG_JSON;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Backend API location.
pub struct ApiConfig {
    /// Absolute base URL of the backend (no trailing slash required).
    pub base_url: String,
}

impl ApiConfig {
    /// Joins `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Embedded frame sources and cross-frame origin policy inputs.
pub struct FrameConfig {
    /// Source loaded into the login frame.
    pub login_src: String,
    /// Source loaded into the register frame.
    pub register_src: String,
    /// Source loaded into the game frame.
    pub game_src: String,
    /// Extra origins, besides the shell's own, allowed to message the shell.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Fixed UI delays.
pub struct TimingConfig {
    /// Minimize/restore/idle-fallback transition delay.
    pub transition_delay_ms: u32,
    /// Delay between a successful auth submit and the parent notification.
    pub post_message_delay_ms: u32,
}

impl TimingConfig {
    /// Returns the transition delay as a [`Duration`].
    pub fn transition_delay(self) -> Duration {
        Duration::from_millis(u64::from(self.transition_delay_ms))
    }

    /// Returns the post-message delay as a [`Duration`].
    pub fn post_message_delay(self) -> Duration {
        Duration::from_millis(u64::from(self.post_message_delay_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Session cookie settings.
pub struct SessionConfig {
    /// Name of the cookie carrying the backend session id.
    pub cookie_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// OAuth authorization request settings for the login frame.
pub struct OAuthConfig {
    /// Provider authorization endpoint.
    pub authorize_url: String,
    /// Public OAuth client id.
    pub client_id: String,
    /// Backend callback receiving the authorization code.
    pub redirect_uri: String,
    /// Requested access type.
    pub access_type: String,
    /// Requested response type.
    pub response_type: String,
    /// Consent prompt mode.
    pub prompt: String,
    /// Requested scopes, joined with spaces on the wire.
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Complete shell configuration shared by the shell and the embedded auth frames.
pub struct ShellConfig {
    /// Config schema version.
    pub schema_version: u32,
    /// Backend API settings.
    pub api: ApiConfig,
    /// Frame sources and origins.
    pub frames: FrameConfig,
    /// Fixed delays.
    pub timing: TimingConfig,
    /// Session cookie settings.
    pub session: SessionConfig,
    /// OAuth request settings.
    pub oauth: OAuthConfig,
}

impl ShellConfig {
    /// Parses the configuration embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded JSON does not match [`ShellConfig`].
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(SHELL_CONFIG_JSON)
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            api: ApiConfig {
                base_url: "http://localhost:4000".to_string(),
            },
            frames: FrameConfig {
                login_src: "login.html".to_string(),
                register_src: "register.html".to_string(),
                game_src: "http://localhost:3000".to_string(),
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            timing: TimingConfig {
                transition_delay_ms: 300,
                post_message_delay_ms: 100,
            },
            session: SessionConfig {
                cookie_name: "sessionId".to_string(),
            },
            oauth: OAuthConfig {
                authorize_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
                client_id: String::new(),
                redirect_uri: "http://localhost:4000/api/users/oauth/google".to_string(),
                access_type: "offline".to_string(),
                response_type: "code".to_string(),
                prompt: "consent".to_string(),
                scopes: Vec::new(),
            },
        }
    }
}
