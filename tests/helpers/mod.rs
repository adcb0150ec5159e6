//! Shared setup for router tests: a migrated on-disk database, fake email
//! and media collaborators, and request helpers.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use bytes::Bytes;
use ccswing_event::{Category, Event};
use ccswing_media::{MediaBytes, MediaError, MediaItem, MediaKind, MediaSource, WeeklyPhoto};
use ccswing_prayer::{PrayerNotifier, PrayerRequest};
use ccswing_signup::{Confirmation, SignupNotifier};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use time::{Date, Duration};
use tower::ServiceExt;

#[derive(Default)]
pub struct FakeMailer {
    pub fail: AtomicBool,
    pub confirmations: Mutex<Vec<Confirmation>>,
    pub prayers: Mutex<Vec<PrayerRequest>>,
}

impl FakeMailer {
    pub fn fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn confirmations(&self) -> Vec<Confirmation> {
        self.confirmations.lock().unwrap().clone()
    }

    pub fn prayers(&self) -> Vec<PrayerRequest> {
        self.prayers.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SignupNotifier for FakeMailer {
    async fn send_confirmation(&self, confirmation: &Confirmation) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("smtp unavailable");
        }

        self.confirmations.lock().unwrap().push(confirmation.clone());

        Ok(())
    }
}

#[async_trait::async_trait]
impl PrayerNotifier for FakeMailer {
    async fn send_prayer(&self, request: &PrayerRequest) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("smtp unavailable");
        }

        self.prayers.lock().unwrap().push(request.clone());

        Ok(())
    }
}

#[derive(Default)]
pub struct FakeMedia {
    pub weekly: Option<WeeklyPhoto>,
}

#[async_trait::async_trait]
impl MediaSource for FakeMedia {
    async fn list_media(&self) -> Result<Vec<MediaItem>, MediaError> {
        Ok(vec![MediaItem {
            id: "img-1".to_string(),
            name: "social.jpg".to_string(),
            kind: MediaKind::Image,
            link: "/api/media/img-1".to_string(),
            thumbnail: Some("https://thumb/img-1".to_string()),
        }])
    }

    async fn fetch_media(&self, id: &str) -> Result<MediaBytes, MediaError> {
        match id {
            "img-1" => Ok(MediaBytes {
                content_type: Some("image/jpeg".to_string()),
                bytes: Bytes::from_static(b"jpeg-bytes"),
            }),
            _ => Err(MediaError::Upstream(StatusCode::NOT_FOUND)),
        }
    }

    async fn latest_photo(&self) -> Result<Option<WeeklyPhoto>, MediaError> {
        Ok(self.weekly.clone())
    }
}

pub struct TestState {
    pub app: Router,
    pub pool: SqlitePool,
    pub mailer: Arc<FakeMailer>,
    pub today: Date,
    _dir: TempDir,
}

pub async fn setup_test_state() -> anyhow::Result<TestState> {
    setup_test_state_with_media(FakeMedia::default()).await
}

pub async fn setup_test_state_with_media(media: FakeMedia) -> anyhow::Result<TestState> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let url = format!("sqlite:{}", path.to_str().unwrap());

    let config = ccswing::Config::load(None)?;
    let pool = ccswing::db::create_pool(&url, 1).await?;
    ccswing::db::migrate(&pool).await?;

    let mailer = Arc::new(FakeMailer::default());
    let state = ccswing::AppState::new(
        config,
        pool.clone(),
        mailer.clone(),
        mailer.clone(),
        Arc::new(media),
    );
    let today = state.today();

    Ok(TestState {
        app: ccswing::router(state),
        pool,
        mailer,
        today,
        _dir: dir,
    })
}

impl TestState {
    /// Inserts an event `offset` days away from the studio's today.
    pub async fn event(
        &self,
        id: i64,
        title: &str,
        offset: i64,
        category: Option<Category>,
    ) -> anyhow::Result<Event> {
        let event = Event {
            id,
            title: title.to_string(),
            date: self.today + Duration::days(offset),
            time: Some("7:00 PM - 10:00 PM".to_string()),
            location: "Events at 1900".to_string(),
            description: format!("{title} description"),
            cost: Some(10.0),
            category,
        };

        ccswing_event::Query(self.pool.clone()).insert(&event).await?;

        Ok(event)
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;

        read_json(response).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(
        &self,
        uri: &str,
        body: impl Into<String>,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.into()))?,
            )
            .await?;

        read_json(response).await
    }
}

async fn read_json(
    response: axum::response::Response,
) -> anyhow::Result<(StatusCode, serde_json::Value)> {
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body)?
    };

    Ok((status, json))
}
