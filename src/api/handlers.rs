//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    error::HeaderError,
    state::{HeaderState, UserSession},
    view::HeaderView,
};
use super::responses::{
    ApiResponse, CountdownResponse, ErrorResponse, HealthResponse, LocaleChangeResponse,
    LocaleRequest, LocaleResponse, PageTitleRequest,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a state error onto an HTTP status and log it
fn reject(action: &str, e: HeaderError) -> ApiError {
    let status = match &e {
        HeaderError::UnsupportedLocale { .. } => {
            warn!("Rejected {}: {}", action, e);
            StatusCode::BAD_REQUEST
        }
        _ => {
            error!("Failed to {}: {}", action, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}

/// Handle GET /header - Return the full header render model
pub async fn header_handler(
    State(state): State<Arc<HeaderState>>,
) -> Result<Json<HeaderView>, ApiError> {
    state
        .render()
        .map(Json)
        .map_err(|e| reject("render header", e))
}

/// Handle GET /countdown - Return the countdown and the numbers behind it
pub async fn countdown_handler(State(state): State<Arc<HeaderState>>) -> Json<CountdownResponse> {
    Json(CountdownResponse::from_snapshot(
        state.countdown_snapshot(),
        state.window.seconds(),
    ))
}

/// Handle GET /locale - Return the active and supported locales
pub async fn get_locale_handler(State(state): State<Arc<HeaderState>>) -> Json<LocaleResponse> {
    Json(LocaleResponse::new(state.active_locale(), state.supported_locales()))
}

/// Handle POST /locale - Switch the active locale
pub async fn set_locale_handler(
    State(state): State<Arc<HeaderState>>,
    Json(request): Json<LocaleRequest>,
) -> Result<Json<LocaleChangeResponse>, ApiError> {
    let changed = state
        .set_locale(&request.locale)
        .map_err(|e| reject("switch locale", e))?;

    info!("Locale endpoint called - locale {} (changed: {})", request.locale, changed);
    Ok(Json(LocaleChangeResponse {
        locale: LocaleResponse::new(state.active_locale(), state.supported_locales()),
        changed,
    }))
}

/// Handle PUT /page - Set the page title prop
pub async fn page_title_handler(
    State(state): State<Arc<HeaderState>>,
    Json(request): Json<PageTitleRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    state
        .set_page_title(request.title)
        .map_err(|e| reject("set page title", e))?;
    Ok(Json(ApiResponse::ok("Page title updated".to_string())))
}

/// Handle PUT /session - Set the user session prop
pub async fn set_session_handler(
    State(state): State<Arc<HeaderState>>,
    Json(user): Json<UserSession>,
) -> Result<Json<ApiResponse>, ApiError> {
    let avatar = user.has_avatar();
    state
        .set_session(Some(user))
        .map_err(|e| reject("set session", e))?;
    Ok(Json(ApiResponse::ok(format!(
        "Session updated (avatar {})",
        if avatar { "shown" } else { "hidden" }
    ))))
}

/// Handle DELETE /session - Clear the user session
pub async fn clear_session_handler(
    State(state): State<Arc<HeaderState>>,
) -> Result<Json<ApiResponse>, ApiError> {
    state
        .set_session(None)
        .map_err(|e| reject("clear session", e))?;
    Ok(Json(ApiResponse::ok("Session cleared".to_string())))
}

/// Handle POST /remount - Restart the countdown from a fresh mount
pub async fn remount_handler(
    State(state): State<Arc<HeaderState>>,
) -> Result<Json<CountdownResponse>, ApiError> {
    let generation = state.mount().map_err(|e| reject("remount header", e))?;

    info!("Remount endpoint called - generation {}", generation);
    Ok(Json(CountdownResponse::from_snapshot(
        state.countdown_snapshot(),
        state.window.seconds(),
    )))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<HeaderState>>) -> Json<HealthResponse> {
    let mounted = state.is_mounted().unwrap_or_else(|e| {
        error!("Failed to read mount state: {}", e);
        false
    });
    Json(HealthResponse::ok(state.get_uptime(), mounted))
}
