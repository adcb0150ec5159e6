use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, routes::AppState};

/// GET /api/team
pub async fn list(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.team.list_team().await?))
}

/// GET /api/team/{id}
pub async fn find(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = app_state.team.find(&id).await?.ok_or(AppError::NotFound)?;

    Ok(Json(profile))
}
