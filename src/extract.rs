use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection is rendered through [`AppError`], so a
/// malformed body gets the same JSON shape as every other error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
