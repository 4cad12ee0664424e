use chrono::Utc;
use ghumfir_core::config::LoginMethods;
use ghumfir_core::error::{GhumfirError, RegistrationRule, Result};
use ghumfir_core::models::Identity;
use ghumfir_store::ports::CredentialStore;
use uuid::Uuid;

use crate::oauth::OauthClient;
use crate::session::SessionState;

/// Maximum username length accepted at registration
const MAX_USERNAME_LEN: usize = 15;

/// Minimum password length accepted at registration
const MIN_PASSWORD_LEN: usize = 6;

/// The session authenticator.
///
/// Owns the login state of one session and the credential/provider
/// collaborators it checks against. All transitions land in a
/// well-defined state; a failed attempt never leaves a half-open
/// handshake behind.
pub struct Authenticator<C: CredentialStore> {
    credentials: C,
    methods: LoginMethods,
    oauth: OauthClient,
    session: SessionState,
}

impl<C: CredentialStore> Authenticator<C> {
    /// Create an authenticator with an unauthenticated session
    pub fn new(credentials: C, methods: LoginMethods, oauth: OauthClient) -> Self {
        Self {
            credentials,
            methods,
            oauth,
            session: SessionState::Unauthenticated,
        }
    }

    /// Current session state
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The signed-in identity, if any
    pub fn current_identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Check a username/password pair against the credential store.
    ///
    /// On success the session becomes authenticated; on failure it is
    /// left unchanged and the caller gets `InvalidCredentials`.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Identity> {
        if !self.methods.local {
            return Err(GhumfirError::MethodDisabled {
                method: "local".to_string(),
            });
        }

        if !self.credentials.verify(username, password) {
            tracing::info!(username = %username, "Rejected local login");
            return Err(GhumfirError::InvalidCredentials);
        }

        tracing::info!(username = %username, "Local login");
        let identity = Identity::local(username);
        self.session = SessionState::Authenticated {
            identity: identity.clone(),
            since: Utc::now(),
        };

        Ok(identity)
    }

    /// Register a new local credential pair.
    ///
    /// Rules are checked in a fixed priority order and the first failing
    /// rule wins. Success adds the credential but does NOT sign the user
    /// in; the caller still logs in explicitly.
    pub fn register(&self, username: &str, password: &str, confirm: &str) -> Result<()> {
        let rule_check = |ok: bool, rule: RegistrationRule| {
            if ok {
                Ok(())
            } else {
                Err(GhumfirError::RegistrationRejected { rule })
            }
        };

        rule_check(
            !username.is_empty() && username.chars().all(|c| c.is_ascii_lowercase()),
            RegistrationRule::UsernameNotLowercase,
        )?;
        rule_check(
            username.len() <= MAX_USERNAME_LEN,
            RegistrationRule::UsernameTooLong,
        )?;
        rule_check(
            password.len() >= MIN_PASSWORD_LEN,
            RegistrationRule::PasswordTooShort,
        )?;
        rule_check(
            password.chars().any(|c| c.is_ascii_digit()),
            RegistrationRule::PasswordNeedsDigit,
        )?;
        rule_check(password == confirm, RegistrationRule::ConfirmationMismatch)?;
        rule_check(
            !self.credentials.contains(username),
            RegistrationRule::UsernameTaken,
        )?;

        self.credentials.insert(username, password);
        tracing::info!(username = %username, "Registered local credential");
        Ok(())
    }

    /// Start an external sign-in: generate a fresh anti-forgery state
    /// token, record it, and return the provider authorization URL.
    ///
    /// Calling this while a handshake is already in flight abandons the
    /// old one; the stale callback will then fail the state check.
    pub fn begin_login(&mut self) -> Result<String> {
        if !self.methods.google {
            return Err(GhumfirError::MethodDisabled {
                method: "google".to_string(),
            });
        }

        let state_token = Uuid::new_v4().to_string();
        let url = self.oauth.authorize_url(&state_token)?;

        self.session = SessionState::AwaitingCallback { state_token };
        tracing::info!("Issued authorization request");

        Ok(url)
    }

    /// Complete an external sign-in from the provider callback.
    ///
    /// The pending state token is consumed before any network call, so a
    /// given callback is single-use: replaying the same code lands in
    /// `ExternalAuthFailed` with the session unauthenticated.
    pub async fn complete_login(&mut self, code: &str, returned_state: &str) -> Result<Identity> {
        let expected = match std::mem::take(&mut self.session) {
            SessionState::AwaitingCallback { state_token } => state_token,
            _ => {
                tracing::warn!("Provider callback with no sign-in in progress");
                return Err(GhumfirError::ExternalAuthFailed {
                    reason: "No sign-in in progress; the code may already be used".to_string(),
                });
            }
        };

        if returned_state != expected {
            tracing::warn!("Provider callback state token mismatch");
            return Err(GhumfirError::StateMismatch);
        }

        let token = self.oauth.exchange_code(code).await?;
        let profile = self.oauth.fetch_profile(&token.access_token).await?;

        let identity = profile.into_identity();
        tracing::info!(username = %identity.username, "External login");

        self.session = SessionState::Authenticated {
            identity: identity.clone(),
            since: Utc::now(),
        };

        Ok(identity)
    }

    /// Clear the identity and any in-flight handshake unconditionally
    pub fn logout(&mut self) {
        if let Some(identity) = self.session.identity() {
            tracing::info!(username = %identity.username, "Logout");
        }
        self.session = SessionState::Unauthenticated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oauth::{OauthClient, OauthConfig};
    use ghumfir_store::memory::MemoryCredentialStore;

    fn oauth_client() -> OauthClient {
        OauthClient::new(OauthConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            redirect_url: "http://localhost:3001/api/v1/auth/callback".to_string(),
            authorize_endpoint: "http://127.0.0.1:1/authorize".to_string(),
            token_endpoint: "http://127.0.0.1:1/token".to_string(),
            userinfo_endpoint: "http://127.0.0.1:1/userinfo".to_string(),
        })
    }

    fn authenticator() -> Authenticator<MemoryCredentialStore> {
        Authenticator::new(
            MemoryCredentialStore::from_pairs([("asha", "trek2024")]),
            LoginMethods::default(),
            oauth_client(),
        )
    }

    #[test]
    fn test_login_with_registered_pair() {
        let mut auth = authenticator();
        let identity = auth.login("asha", "trek2024").unwrap();

        assert_eq!(identity.username, "asha");
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_login_with_wrong_password() {
        let mut auth = authenticator();
        let err = auth.login("asha", "wrong").unwrap_err();

        assert!(matches!(err, GhumfirError::InvalidCredentials));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_login_unknown_user() {
        let mut auth = authenticator();
        assert!(matches!(
            auth.login("nobody", "trek2024").unwrap_err(),
            GhumfirError::InvalidCredentials
        ));
    }

    #[test]
    fn test_login_disabled_method() {
        let mut auth = Authenticator::new(
            MemoryCredentialStore::from_pairs([("asha", "trek2024")]),
            LoginMethods {
                local: false,
                google: true,
            },
            oauth_client(),
        );

        assert!(matches!(
            auth.login("asha", "trek2024").unwrap_err(),
            GhumfirError::MethodDisabled { .. }
        ));
    }

    #[test]
    fn test_registration_rule_priority() {
        let auth = authenticator();

        let rejected = |u: &str, p: &str, c: &str| match auth.register(u, p, c) {
            Err(GhumfirError::RegistrationRejected { rule }) => rule,
            other => panic!("expected rejection, got {:?}", other.map(|_| ())),
        };

        // Digits in the username violate the casing rule
        assert_eq!(
            rejected("abc123", "abc123", "abc123"),
            RegistrationRule::UsernameNotLowercase
        );
        assert_eq!(
            rejected("thisusernameiswaytoolong", "abc123", "abc123"),
            RegistrationRule::UsernameTooLong
        );
        assert_eq!(
            rejected("abc", "ab1", "ab1"),
            RegistrationRule::PasswordTooShort
        );
        assert_eq!(
            rejected("abc", "abcdef", "abcdef"),
            RegistrationRule::PasswordNeedsDigit
        );
        assert_eq!(
            rejected("abc", "abc123", "abc124"),
            RegistrationRule::ConfirmationMismatch
        );
        assert_eq!(
            rejected("asha", "abc123", "abc123"),
            RegistrationRule::UsernameTaken
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let auth = authenticator();
        // Violates casing AND length AND digit rules; casing is reported
        match auth.register("ABC123toolongusername", "short", "short") {
            Err(GhumfirError::RegistrationRejected { rule }) => {
                assert_eq!(rule, RegistrationRule::UsernameNotLowercase)
            }
            other => panic!("expected rejection, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_successful_registration_does_not_sign_in() {
        let mut auth = authenticator();
        auth.register("abc", "abc123", "abc123").unwrap();

        assert!(!auth.is_authenticated());
        // But the credential is now usable
        auth.login("abc", "abc123").unwrap();
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_begin_login_records_state_token() {
        let mut auth = authenticator();
        let url = auth.begin_login().unwrap();

        match auth.session() {
            SessionState::AwaitingCallback { state_token } => {
                assert!(url.contains(&format!("state={}", state_token)));
            }
            other => panic!("expected AwaitingCallback, got {:?}", other),
        }
    }

    #[test]
    fn test_begin_login_disabled_method() {
        let mut auth = Authenticator::new(
            MemoryCredentialStore::new(),
            LoginMethods {
                local: true,
                google: false,
            },
            oauth_client(),
        );

        assert!(matches!(
            auth.begin_login().unwrap_err(),
            GhumfirError::MethodDisabled { .. }
        ));
    }

    #[test]
    fn test_begin_login_twice_rotates_token() {
        let mut auth = authenticator();
        auth.begin_login().unwrap();
        let first = match auth.session() {
            SessionState::AwaitingCallback { state_token } => state_token.clone(),
            _ => unreachable!(),
        };

        auth.begin_login().unwrap();
        let second = match auth.session() {
            SessionState::AwaitingCallback { state_token } => state_token.clone(),
            _ => unreachable!(),
        };

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_callback_state_mismatch() {
        let mut auth = authenticator();
        auth.begin_login().unwrap();

        let err = auth.complete_login("valid-code", "forged-state").await.unwrap_err();
        assert!(matches!(err, GhumfirError::StateMismatch));
        assert!(matches!(auth.session(), SessionState::Unauthenticated));
    }

    #[tokio::test]
    async fn test_callback_without_pending_handshake() {
        let mut auth = authenticator();

        let err = auth.complete_login("stale-code", "any-state").await.unwrap_err();
        assert!(matches!(err, GhumfirError::ExternalAuthFailed { .. }));
        assert!(matches!(auth.session(), SessionState::Unauthenticated));
    }

    #[tokio::test]
    async fn test_exchange_failure_returns_to_unauthenticated() {
        let mut auth = authenticator();
        auth.begin_login().unwrap();
        let state_token = match auth.session() {
            SessionState::AwaitingCallback { state_token } => state_token.clone(),
            _ => unreachable!(),
        };

        // Token endpoint is unroutable, so the exchange itself fails
        let err = auth.complete_login("valid-code", &state_token).await.unwrap_err();
        assert!(matches!(err, GhumfirError::ExternalAuthFailed { .. }));
        assert!(matches!(auth.session(), SessionState::Unauthenticated));

        // The handshake was consumed: replaying the callback fails too
        let err = auth.complete_login("valid-code", &state_token).await.unwrap_err();
        assert!(matches!(err, GhumfirError::ExternalAuthFailed { .. }));
    }

    #[test]
    fn test_logout_from_authenticated() {
        let mut auth = authenticator();
        auth.login("asha", "trek2024").unwrap();

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.current_identity().is_none());
    }

    #[test]
    fn test_logout_clears_pending_handshake() {
        let mut auth = authenticator();
        auth.begin_login().unwrap();

        auth.logout();
        assert!(matches!(auth.session(), SessionState::Unauthenticated));
    }
}
