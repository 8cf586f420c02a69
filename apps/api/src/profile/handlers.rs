use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::profile::{profile_options, Profile, ProfileOptions};
use crate::profile::capture::{validate_capture, CaptureRequest};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: Uuid,
}

/// GET /api/v1/profile/options
pub async fn handle_profile_options() -> Json<ProfileOptions> {
    Json(profile_options())
}

/// PUT /api/v1/profile
///
/// Validates the submitted pair and overwrites the session's slot.
pub async fn handle_capture_profile(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SessionQuery>,
    AppJson(req): AppJson<CaptureRequest>,
) -> Result<Json<Profile>, AppError> {
    let profile = validate_capture(&req, state.config.strict_profile_capture)?;
    state.profiles.set(params.session_id, &profile).await?;
    info!(
        "Captured profile for session {}: {} / {}",
        params.session_id, profile.qualification, profile.interest
    );
    Ok(Json(profile))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SessionQuery>,
) -> Result<Json<Profile>, AppError> {
    let profile = state
        .profiles
        .get(params.session_id)
        .await?
        .ok_or(AppError::ProfileMissing)?;
    Ok(Json(profile))
}

/// DELETE /api/v1/profile
pub async fn handle_clear_profile(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SessionQuery>,
) -> Result<StatusCode, AppError> {
    state.profiles.clear(params.session_id).await?;
    info!("Cleared profile for session {}", params.session_id);
    Ok(StatusCode::NO_CONTENT)
}
