mod request;
mod response;

pub use request::{CallbackQuery, LoginRequest, PlacesQuery, RegisterRequest};
pub use response::{
    AuthorizeResponse, FilterOptionsResponse, HealthResponse, ItineraryResponse, MessageResponse,
    PlacesResponse, SessionResponse,
};
