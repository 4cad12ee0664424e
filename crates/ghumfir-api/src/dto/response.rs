use ghumfir_core::models::{Identity, Place};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok" }
    }
}

/// Session state response
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

impl SessionResponse {
    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            identity: None,
        }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            authenticated: true,
            identity: Some(identity),
        }
    }
}

/// Filtered place listing
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub count: usize,
    pub places: Vec<Place>,
}

/// Dropdown choices derived from the catalog, sentinel first
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub districts: Vec<String>,
    pub categories: Vec<String>,
}

/// One itinerary with its stops resolved to place records
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub name: String,
    pub days: u32,
    pub stops: Vec<Place>,
}

/// Begin-external-login response
#[derive(Debug, Serialize)]
pub struct AuthorizeResponse {
    pub authorize_url: String,
}

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
