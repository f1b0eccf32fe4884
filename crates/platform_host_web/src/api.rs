//! `fetch`-backed backend API adapter.

use platform_host::{ApiConfig, ApiError, ApiRequest, ApiResponse, BackendApi, BackendApiFuture};
#[cfg(target_arch = "wasm32")]
use platform_host::HttpMethod;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser backend adapter. Every request is credentialed so the session cookie travels with it.
pub struct WebBackendApi {
    api: ApiConfig,
}

impl WebBackendApi {
    /// Creates an adapter rooted at the configured base URL.
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }

    /// Returns the absolute URL for `request`.
    pub fn url_for(&self, request: &ApiRequest) -> String {
        self.api.url(request.endpoint.path())
    }
}

impl BackendApi for WebBackendApi {
    fn send<'a>(
        &'a self,
        request: ApiRequest,
    ) -> BackendApiFuture<'a, Result<ApiResponse, ApiError>> {
        Box::pin(async move {
            let url = self.url_for(&request);
            let (status, text) = fetch_text(&url, &request).await?;
            Ok(ApiResponse::new(status, parse_body(&text)))
        })
    }
}

/// Parses a response body, mapping empty or non-JSON bodies to `Null`.
fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or(Value::Null)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str, request: &ApiRequest) -> Result<(u16, String), ApiError> {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    let builder = match request.endpoint.method() {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
    }
    .credentials(RequestCredentials::Include);

    let response = match &request.body {
        Some(body) => builder
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    Ok((status, text))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(url: &str, request: &ApiRequest) -> Result<(u16, String), ApiError> {
    let _ = request;
    Err(ApiError::Network(format!(
        "fetch is only available when compiled for wasm32 ({url})"
    )))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::BackendEndpoint;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn url_joins_base_and_endpoint_path() {
        let api = WebBackendApi::new(ApiConfig {
            base_url: "http://localhost:4000/".to_string(),
        });
        assert_eq!(
            api.url_for(&ApiRequest::new(BackendEndpoint::SessionTokens)),
            "http://localhost:4000/api/users/tokens"
        );
    }

    #[test]
    fn non_json_bodies_parse_as_null() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("<html>"), Value::Null);
        assert_eq!(parse_body(r#"{"success":true}"#), json!({ "success": true }));
    }

    #[test]
    fn native_fetch_reports_network_error() {
        let api = WebBackendApi::new(ApiConfig {
            base_url: "http://localhost:4000".to_string(),
        });
        let result = block_on(api.send(ApiRequest::new(BackendEndpoint::Logout)));
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
