//! Ghumfir Auth - The session authenticator
//!
//! One state machine covers every supported login method: local
//! credential checks, credential self-registration, and an external
//! OAuth2 authorization-code sign-in. Which methods are enabled is
//! configuration, not separate code paths. Every failure resolves to a
//! well-defined session state; nothing here is fatal.

pub mod authenticator;
pub mod oauth;
pub mod session;

pub use authenticator::Authenticator;
pub use oauth::{OauthClient, OauthConfig};
pub use session::SessionState;
