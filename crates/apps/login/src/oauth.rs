//! Google sign-in authorization URL.

use platform_host::OAuthConfig;
use url::Url;

/// Builds the provider authorization URL for the configured OAuth client.
///
/// # Errors
///
/// Returns an error when the configured authorization endpoint is not an absolute URL.
pub fn google_authorize_url(config: &OAuthConfig) -> Result<Url, url::ParseError> {
    let scope = config.scopes.join(" ");
    Url::parse_with_params(
        &config.authorize_url,
        [
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("access_type", config.access_type.as_str()),
            ("response_type", config.response_type.as_str()),
            ("prompt", config.prompt.as_str()),
            ("scope", scope.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use platform_host::ShellConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn authorize_url_carries_every_client_parameter() {
        let mut config = ShellConfig::default().oauth;
        config.client_id = "client-1".to_string();
        config.scopes = vec!["profile".to_string(), "email".to_string()];

        let url = google_authorize_url(&config).expect("valid url");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        assert_eq!(url.origin().ascii_serialization(), "https://accounts.google.com");
        assert_eq!(url.path(), "/o/oauth2/v2/auth");
        assert_eq!(
            pairs,
            vec![
                (
                    "redirect_uri".to_string(),
                    "http://localhost:4000/api/users/oauth/google".to_string()
                ),
                ("client_id".to_string(), "client-1".to_string()),
                ("access_type".to_string(), "offline".to_string()),
                ("response_type".to_string(), "code".to_string()),
                ("prompt".to_string(), "consent".to_string()),
                ("scope".to_string(), "profile email".to_string()),
            ]
        );
        assert!(url.as_str().contains("scope=profile+email"));
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let mut config = ShellConfig::default().oauth;
        config.authorize_url = "/oauth".to_string();
        assert!(google_authorize_url(&config).is_err());
    }
}
