use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use serde_json::json;

use crate::{error::AppError, routes::AppState};

/// GET /api/media
pub async fn list(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let files = app_state.media.list_media().await?;

    Ok(Json(json!({ "files": files })))
}

/// GET /api/media/{id}
pub async fn fetch(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let media = app_state.media.fetch_media(&id).await?;
    let content_type = media
        .content_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
        ],
        media.bytes,
    ))
}

/// GET /api/weekly-photo
pub async fn weekly_photo(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let file = app_state.media.latest_photo().await?;

    Ok(Json(json!({ "file": file })))
}
