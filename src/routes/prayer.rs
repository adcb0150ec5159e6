use axum::{Json, extract::State, response::IntoResponse};
use ccswing_prayer::PrayerForm;
use serde_json::json;

use crate::{error::AppError, extract::JsonBody, routes::AppState};

/// POST /api/prayer
pub async fn action(
    State(app_state): State<AppState>,
    JsonBody(input): JsonBody<PrayerForm>,
) -> Result<impl IntoResponse, AppError> {
    app_state.prayer.submit(input).await?;

    Ok(Json(json!({ "success": true })))
}
