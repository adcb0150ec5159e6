use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use ccswing_event::{Carousel, Event, MonthCursor, calendar_grid, is_signup_open, list_view};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct EventView<'a> {
    #[serde(flatten)]
    pub event: &'a Event,
    pub signup_open: bool,
}

/// A failed read shows as "no events" instead of an error page.
async fn load_events(app_state: &AppState) -> Vec<Event> {
    match app_state.events.list_events().await {
        Ok(events) => events,
        Err(err) => {
            tracing::warn!(err = %err, "Failed to load events, showing none");
            Vec::new()
        }
    }
}

/// GET /api/events
pub async fn list(State(app_state): State<AppState>) -> Response {
    let events = load_events(&app_state).await;
    let today = app_state.today();

    let views = list_view(&events, today)
        .into_iter()
        .map(|event| EventView {
            event,
            signup_open: is_signup_open(event, today),
        })
        .collect::<Vec<_>>();

    Json(views).into_response()
}

/// GET /api/events/spotlight
pub async fn spotlight(State(app_state): State<AppState>) -> Response {
    let events = load_events(&app_state).await;
    let today = app_state.today();

    let view = ccswing_event::spotlight(&events, today).map(|event| EventView {
        event,
        signup_open: is_signup_open(event, today),
    });

    Json(view).into_response()
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u8>,
}

/// GET /api/events/calendar?year=&month=
pub async fn calendar(
    State(app_state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, AppError> {
    let today = app_state.today();

    let month = match (query.year, query.month) {
        (None, None) => MonthCursor::from_date(today),
        (year, month) => MonthCursor::from_numbers(
            year.unwrap_or(today.year()),
            month.unwrap_or(today.month() as u8),
        )
        .ok_or_else(|| AppError::BadRequest("invalid year or month".to_string()))?,
    };

    let events = load_events(&app_state).await;
    let grid = calendar_grid(&events, month, today);

    Ok(Json(grid).into_response())
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Next,
    Prev,
}

#[derive(Deserialize)]
pub struct CarouselQuery {
    pub index: Option<usize>,
    pub step: Option<Step>,
}

#[derive(Serialize)]
struct CarouselView<'a> {
    index: Option<usize>,
    total: usize,
    event: Option<EventView<'a>>,
}

/// GET /api/events/carousel?index=&step=
pub async fn carousel(
    State(app_state): State<AppState>,
    Query(query): Query<CarouselQuery>,
) -> Response {
    let events = load_events(&app_state).await;
    let today = app_state.today();
    let carousel = Carousel::new(&events, today);

    let current = query.index.unwrap_or_default();
    let index = match query.step {
        Some(Step::Next) => carousel.next(current),
        Some(Step::Prev) => carousel.prev(current),
        None => carousel.select(current),
    };

    let event = index.and_then(|i| carousel.get(i)).map(|event| EventView {
        event,
        signup_open: is_signup_open(event, today),
    });

    Json(CarouselView {
        index,
        total: carousel.len(),
        event,
    })
    .into_response()
}
