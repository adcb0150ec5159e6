use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ccswing_media::MediaError;
use ccswing_prayer::PrayerError;
use ccswing_signup::{SignupError, SignupReceipt};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error")]
    Validation(ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Not found")]
    NotFound,

    #[error("Signups are closed for this event")]
    SignupClosed,

    #[error("Signup not saved")]
    SignupNotSaved,

    #[error("Confirmation not sent")]
    ConfirmationNotSent(SignupReceipt),

    #[error("Prayer request not sent")]
    PrayerNotSent,

    #[error("Media is not configured")]
    MediaNotConfigured,

    #[error("Upstream returned {0}")]
    Upstream(StatusCode),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<ccswing_shared::Error> for AppError {
    fn from(err: ccswing_shared::Error) -> Self {
        match err {
            ccswing_shared::Error::Validate(errors) => AppError::Validation(errors),
            ccswing_shared::Error::NotFound => AppError::NotFound,
            err => AppError::InternalError(err.into()),
        }
    }
}

impl From<SignupError> for AppError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::Rejected(errors) => AppError::Validation(errors),
            SignupError::NotSaved(_) => AppError::SignupNotSaved,
            SignupError::ConfirmationNotSent { receipt, .. } => {
                AppError::ConfirmationNotSent(receipt)
            }
        }
    }
}

impl From<PrayerError> for AppError {
    fn from(err: PrayerError) -> Self {
        match err {
            PrayerError::Rejected(errors) => AppError::Validation(errors),
            PrayerError::NotSent(_) => AppError::PrayerNotSent,
        }
    }
}

impl From<MediaError> for AppError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::NotConfigured => AppError::MediaNotConfigured,
            MediaError::Upstream(status) => AppError::Upstream(status),
            MediaError::Http(err) => AppError::InternalError(err.into()),
        }
    }
}

/// Messages per field, falling back to the rule code when a rule has no
/// message.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();

            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "validation",
                    "message": "Please fix the highlighted fields.",
                    "fields": field_messages(&errors),
                })),
            )
                .into_response(),
            AppError::BadRequest(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "bad_request", "message": reason })),
            )
                .into_response(),
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                Json(json!({ "error": "invalid_body", "message": rejection.body_text() })),
            )
                .into_response(),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "not_found", "message": message })),
            )
                .into_response(),
            AppError::SignupClosed => (
                StatusCode::CONFLICT,
                Json(json!({ "error": "signup_closed", "message": message })),
            )
                .into_response(),
            AppError::SignupNotSaved => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "signup_not_saved",
                    "message": "We could not save your signup. Please try again.",
                })),
            )
                .into_response(),
            AppError::ConfirmationNotSent(receipt) => (
                StatusCode::ACCEPTED,
                Json(json!({
                    "error": "confirmation_not_sent",
                    "message": "You're signed up, but we could not send the confirmation email.",
                    "recorded": true,
                    "signup": receipt,
                })),
            )
                .into_response(),
            AppError::PrayerNotSent => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "prayer_not_sent", "message": "Failed to send email" })),
            )
                .into_response(),
            AppError::MediaNotConfigured => {
                tracing::error!("Media requested but drive credentials are missing");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "media_not_configured", "message": "Missing Drive credentials" })),
                )
                    .into_response()
            }
            AppError::Upstream(status) => (
                status,
                Json(json!({ "error": "upstream", "message": format!("Drive returned {}", status.as_u16()) })),
            )
                .into_response(),
            AppError::InternalError(err) => {
                tracing::error!(err = ?err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal",
                        "message": "An unexpected error occurred. Please try again later.",
                    })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_confirmation_not_sent_is_accepted() {
        let response = AppError::ConfirmationNotSent(SignupReceipt {
            signup_id: "01J0000000000000000000000".to_string(),
            event_id: 1,
            event_title: "Fall Social".to_string(),
            email: "jane@example.com".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[test]
    fn test_field_messages_fall_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("email"));

        let messages = field_messages(&errors);
        assert_eq!(messages["email"], vec!["email".to_string()]);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::SignupClosed.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::SignupNotSaved.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream(StatusCode::NOT_FOUND).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
