use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::dto::{
    AuthorizeResponse, CallbackQuery, LoginRequest, MessageResponse, RegisterRequest,
    SessionResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut authenticator = state.authenticator.write().await;
    let identity = authenticator.login(&request.username, &request.password)?;

    Ok(Json(SessionResponse::authenticated(identity)))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let authenticator = state.authenticator.read().await;
    authenticator.register(&request.username, &request.password, &request.confirm_password)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registered. You can now log in.".to_string(),
        }),
    ))
}

pub async fn google_begin(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AuthorizeResponse>, ApiError> {
    let mut authenticator = state.authenticator.write().await;
    let authorize_url = authenticator.begin_login()?;

    Ok(Json(AuthorizeResponse { authorize_url }))
}

pub async fn google_callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
) -> Result<Json<SessionResponse>, ApiError> {
    if let Some(error) = query.error {
        tracing::warn!(error = %error, "Provider callback reported an error");
        return Err(ApiError::unauthorized("Login failed").with_details(error));
    }

    let (code, returned_state) = match (query.code, query.state) {
        (Some(code), Some(returned_state)) => (code, returned_state),
        _ => return Err(ApiError::bad_request("Callback is missing code or state")),
    };

    let mut authenticator = state.authenticator.write().await;
    let identity = authenticator.complete_login(&code, &returned_state).await?;

    Ok(Json(SessionResponse::authenticated(identity)))
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let mut authenticator = state.authenticator.write().await;
    authenticator.logout();

    Json(SessionResponse::unauthenticated())
}

pub async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    let authenticator = state.authenticator.read().await;

    match authenticator.current_identity() {
        Some(identity) => Json(SessionResponse::authenticated(identity.clone())),
        None => Json(SessionResponse::unauthenticated()),
    }
}
