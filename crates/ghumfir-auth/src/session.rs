use chrono::{DateTime, Utc};
use ghumfir_core::models::Identity;
use serde::Serialize;

/// Login state of one session.
///
/// The anti-forgery token held by `AwaitingCallback` correlates an
/// outgoing authorization request with its returning callback; it is
/// generated fresh per handshake and never reused.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    /// No user is signed in
    #[default]
    Unauthenticated,

    /// An authorization request was issued; waiting for the provider's
    /// redirect with a code
    AwaitingCallback {
        #[serde(skip)]
        state_token: String,
    },

    /// A user is signed in
    Authenticated {
        identity: Identity,
        since: DateTime<Utc>,
    },
}

impl SessionState {
    /// The signed-in identity, if any
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated { identity, .. } => Some(identity),
            _ => None,
        }
    }

    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unauthenticated() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert!(state.identity().is_none());
    }

    #[test]
    fn test_authenticated_exposes_identity() {
        let state = SessionState::Authenticated {
            identity: Identity::local("asha"),
            since: Utc::now(),
        };
        assert!(state.is_authenticated());
        assert_eq!(state.identity().unwrap().username, "asha");
    }

    #[test]
    fn test_state_token_never_serializes() {
        let state = SessionState::AwaitingCallback {
            state_token: "secret-token".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("secret-token"));
        assert!(json.contains("awaiting_callback"));
    }
}
