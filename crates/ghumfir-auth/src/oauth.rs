//! OAuth2 authorization-code client.
//!
//! Two network calls per sign-in: the code-for-token exchange at the
//! provider's token endpoint, and the profile fetch at its userinfo
//! endpoint. Neither is retried; a failed exchange sends the user back to
//! the login screen and the human re-initiates.

use ghumfir_core::config::ProviderConfig;
use ghumfir_core::error::{GhumfirError, Result};
use ghumfir_core::models::{AuthProvider, Identity};
use serde::{Deserialize, Serialize};

/// Scopes requested from the identity provider
pub const SCOPES: &str = "openid email profile";

/// Resolved provider settings for one client
#[derive(Debug, Clone)]
pub struct OauthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub authorize_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
}

impl OauthConfig {
    /// Flatten the layered provider configuration into client settings
    pub fn from_provider(provider: &ProviderConfig) -> Self {
        Self {
            client_id: provider.client_id.value.clone(),
            client_secret: provider.client_secret.value.clone(),
            redirect_url: provider.redirect_url.value.clone(),
            authorize_endpoint: provider.authorize_endpoint.value.clone(),
            token_endpoint: provider.token_endpoint.value.clone(),
            userinfo_endpoint: provider.userinfo_endpoint.value.clone(),
        }
    }
}

/// OAuth2 client for the external identity provider
pub struct OauthClient {
    config: OauthConfig,
    client: reqwest::Client,
}

impl OauthClient {
    /// Create a new client
    pub fn new(config: OauthConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Whether the provider is configured well enough to start a sign-in
    pub fn is_configured(&self) -> bool {
        !self.config.client_id.is_empty() && !self.config.redirect_url.is_empty()
    }

    /// Build the authorization request URL for the given anti-forgery
    /// state value.
    pub fn authorize_url(&self, state: &str) -> Result<String> {
        if self.config.client_id.is_empty() {
            return Err(GhumfirError::ConfigMissing {
                key: "google.client_id".to_string(),
            });
        }
        if self.config.redirect_url.is_empty() {
            return Err(GhumfirError::ConfigMissing {
                key: "google.redirect_url".to_string(),
            });
        }

        let url = reqwest::Url::parse_with_params(
            &self.config.authorize_endpoint,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", SCOPES),
                ("state", state),
            ],
        )
        .map_err(|e| GhumfirError::ConfigInvalid {
            key: "google.authorize_endpoint".to_string(),
            reason: e.to_string(),
        })?;

        Ok(url.into())
    }

    /// Exchange an authorization code for an access token.
    ///
    /// The provider rejects a re-used code, so a replay surfaces here as
    /// a failed exchange rather than a second sign-in.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        let response = self
            .client
            .post(&self.config.token_endpoint)
            .form(&TokenRequest {
                code,
                client_id: &self.config.client_id,
                client_secret: &self.config.client_secret,
                redirect_uri: &self.config.redirect_url,
                grant_type: "authorization_code",
            })
            .send()
            .await
            .map_err(|e| GhumfirError::ExternalAuthFailed {
                reason: format!("Token endpoint unreachable: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GhumfirError::ExternalAuthFailed {
                reason: format!("Token exchange rejected ({}): {}", status, error_text),
            });
        }

        response.json().await.map_err(|e| GhumfirError::ExternalAuthFailed {
            reason: format!("Malformed token response: {}", e),
        })
    }

    /// Fetch the signed-in user's profile with a bearer token
    pub async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile> {
        let response = self
            .client
            .get(&self.config.userinfo_endpoint)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| GhumfirError::ExternalAuthFailed {
                reason: format!("Userinfo endpoint unreachable: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GhumfirError::ExternalAuthFailed {
                reason: format!("Profile fetch rejected ({}): {}", status, error_text),
            });
        }

        response.json().await.map_err(|e| GhumfirError::ExternalAuthFailed {
            reason: format!("Malformed userinfo response: {}", e),
        })
    }
}

/// Form body for the token endpoint
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    grant_type: &'a str,
}

/// Response from the token endpoint
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Profile returned by the userinfo endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Provider-issued subject identifier
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserProfile {
    /// Turn the provider profile into a session identity. The display
    /// name falls back to the email, then the subject id.
    pub fn into_identity(self) -> Identity {
        let username = self
            .name
            .or_else(|| self.email.clone())
            .unwrap_or(self.sub);
        Identity {
            username,
            email: self.email,
            picture: self.picture,
            provider: AuthProvider::Google,
        }
    }
}
