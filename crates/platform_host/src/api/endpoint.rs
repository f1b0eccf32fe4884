//! Backend endpoint catalog and request/response value types.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP methods used by the shell.
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
}

impl HttpMethod {
    /// Returns the method token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Closed set of backend endpoints consumed by the shell and its auth frames.
pub enum BackendEndpoint {
    /// Existing-session check.
    SessionTokens,
    /// Credential login.
    Login,
    /// Account creation.
    Register,
    /// Session termination.
    Logout,
    /// Current user's transactions.
    Transactions,
    /// Current user's recent games.
    Tournaments,
    /// Wallet address update.
    Wallet,
}

impl BackendEndpoint {
    /// Returns the HTTP method for this endpoint.
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::SessionTokens | Self::Transactions | Self::Tournaments => HttpMethod::Get,
            Self::Login | Self::Register | Self::Logout => HttpMethod::Post,
            Self::Wallet => HttpMethod::Put,
        }
    }

    /// Returns the path relative to the API base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::SessionTokens => "/api/users/tokens",
            Self::Login => "/api/users/login",
            Self::Register => "/api/users/register",
            Self::Logout => "/api/users/logout",
            Self::Transactions => "/api/transactions",
            Self::Tournaments => "/api/tournaments",
            Self::Wallet => "/api/users/wallet",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One backend call. Every call carries session cookies.
pub struct ApiRequest {
    /// Target endpoint.
    pub endpoint: BackendEndpoint,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a body-less request.
    pub fn new(endpoint: BackendEndpoint) -> Self {
        Self {
            endpoint,
            body: None,
        }
    }

    /// Creates a request with a serialized JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when `body` cannot be serialized.
    pub fn with_json<T: Serialize>(endpoint: BackendEndpoint, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(Self {
            endpoint,
            body: Some(body),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Backend response: status code plus the parsed JSON body (`Null` when absent or not JSON).
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed body.
    pub body: Value,
}

impl ApiResponse {
    /// Creates a response value.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns whether the status is in the 2xx range.
    pub fn is_ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Returns the body's `success` flag, treating a missing flag as `false`.
    pub fn success_flag(&self) -> bool {
        self.body
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Returns the server-provided `message` when it is a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.body.clone()).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Backend call failure before an application-level response was available.
pub enum ApiError {
    /// Transport failure (fetch rejected, CORS, offline, unsupported target).
    Network(String),
    /// Request or response body could not be (de)serialized.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(message) => write!(f, "network error: {message}"),
            Self::Decode(message) => write!(f, "decode error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn endpoints_map_to_expected_methods_and_paths() {
        let table = [
            (BackendEndpoint::SessionTokens, "GET", "/api/users/tokens"),
            (BackendEndpoint::Login, "POST", "/api/users/login"),
            (BackendEndpoint::Register, "POST", "/api/users/register"),
            (BackendEndpoint::Logout, "POST", "/api/users/logout"),
            (BackendEndpoint::Transactions, "GET", "/api/transactions"),
            (BackendEndpoint::Tournaments, "GET", "/api/tournaments"),
            (BackendEndpoint::Wallet, "PUT", "/api/users/wallet"),
        ];
        for (endpoint, method, path) in table {
            assert_eq!(endpoint.method().as_str(), method);
            assert_eq!(endpoint.path(), path);
        }
    }

    #[test]
    fn response_helpers_read_status_flag_and_message() {
        let ok = ApiResponse::new(200, json!({ "success": true }));
        assert!(ok.is_ok());
        assert!(ok.success_flag());
        assert_eq!(ok.message(), None);

        let rejected = ApiResponse::new(401, json!({ "message": "Invalid credentials" }));
        assert!(!rejected.is_ok());
        assert!(!rejected.success_flag());
        assert_eq!(rejected.message(), Some("Invalid credentials"));

        let empty_message = ApiResponse::new(500, json!({ "message": "" }));
        assert_eq!(empty_message.message(), None);
    }
}
