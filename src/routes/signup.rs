use axum::{Json, extract::State, response::IntoResponse};
use ccswing_event::is_signup_open;
use ccswing_signup::SignupForm;
use serde::Deserialize;
use serde_json::json;

use crate::{error::AppError, extract::JsonBody, routes::AppState};

#[derive(Deserialize)]
pub struct ActionInput {
    pub event_id: i64,
    #[serde(flatten)]
    pub form: SignupForm,
}

/// POST /api/event-signup
///
/// Past events refuse signups before anything is validated or stored. Once
/// accepted the pipeline runs on its own task so a dropped connection cannot
/// stop it between storing the signup and sending the confirmation.
pub async fn action(
    State(app_state): State<AppState>,
    JsonBody(input): JsonBody<ActionInput>,
) -> Result<impl IntoResponse, AppError> {
    let event = app_state
        .events
        .find(input.event_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if !is_signup_open(&event, app_state.today()) {
        return Err(AppError::SignupClosed);
    }

    let pipeline = app_state.signup.clone();
    let receipt = tokio::spawn(async move { pipeline.submit(input.form, &event).await })
        .await
        .map_err(anyhow::Error::from)??;

    Ok(Json(json!({ "success": true, "signup": receipt })))
}
