//! Settings handlers - application configuration.

use axum::Json;
use axum::extract::State;

use crate::error::HttpError;
use crate::state::AppState;
use modeldeck_core::{Settings, SettingsUpdate, validate_settings};

/// Get application settings.
pub async fn get(State(state): State<AppState>) -> Result<Json<Settings>, HttpError> {
    Ok(Json(state.settings.load().await?))
}

/// Update application settings.
///
/// Merges the partial update into the stored settings, validates, and
/// persists immediately.
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<SettingsUpdate>,
) -> Result<Json<Settings>, HttpError> {
    let mut settings = state.settings.load().await?;
    settings.merge(&req);
    validate_settings(&settings).map_err(|e| HttpError::BadRequest(e.to_string()))?;
    state.settings.save(&settings).await?;
    Ok(Json(settings))
}
