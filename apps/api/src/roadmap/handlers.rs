//! Axum route handlers for the Roadmap API.

use axum::{
    extract::State,
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::profile::Profile;
use crate::models::roadmap::Roadmap;
use crate::profile::handlers::SessionQuery;
use crate::roadmap::resolve;
use crate::state::AppState;

/// GET /api/v1/roadmap
///
/// Reads the session's stored profile and resolves it fresh on every call.
/// No stored profile → 404 `NO_PROFILE`.
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SessionQuery>,
) -> Result<Json<Roadmap>, AppError> {
    let profile = state
        .profiles
        .get(params.session_id)
        .await?
        .ok_or(AppError::ProfileMissing)?;

    debug!("Resolving roadmap for session {}", params.session_id);
    let steps = resolve(&profile);
    Ok(Json(Roadmap { profile, steps }))
}

/// POST /api/v1/roadmap/resolve
///
/// Resolves the posted profile without touching storage. Accepts any strings.
pub async fn handle_resolve(AppJson(profile): AppJson<Profile>) -> Json<Roadmap> {
    let steps = resolve(&profile);
    Json(Roadmap { profile, steps })
}
