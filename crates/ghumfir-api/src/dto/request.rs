use serde::Deserialize;

/// Local login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Self-registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Place listing query parameters. Absent parameters mean "all" for the
/// dropdowns and an empty free-text query.
#[derive(Debug, Default, Deserialize)]
pub struct PlacesQuery {
    pub district: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Provider callback query parameters. The provider sends either a code
/// and state, or an error (e.g. the user denied consent).
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}
