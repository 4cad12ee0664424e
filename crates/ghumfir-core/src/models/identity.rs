use serde::{Deserialize, Serialize};

/// Which login method produced an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Username/password pair held in the local credential store
    Local,
    /// Google OAuth2 authorization-code sign-in
    Google,
}

/// The authenticated user of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Display name; the local username, or the provider profile name
    pub username: String,

    /// Email address, when the provider shares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Profile picture URL from the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Login method that produced this identity
    pub provider: AuthProvider,
}

impl Identity {
    /// Identity for a locally authenticated username
    pub fn local(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            picture: None,
            provider: AuthProvider::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_identity() {
        let identity = Identity::local("asha");
        assert_eq!(identity.username, "asha");
        assert_eq!(identity.provider, AuthProvider::Local);
        assert!(identity.email.is_none());
    }

    #[test]
    fn test_provider_serializes_lowercase() {
        let value = serde_json::to_value(AuthProvider::Google).unwrap();
        assert_eq!(value, "google");
    }
}
