use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use ccswing_media::MediaSource;
use ccswing_prayer::{PrayerNotifier, PrayerService};
use ccswing_signup::{SignupNotifier, SignupPipeline};
use sqlx::SqlitePool;
use time::Date;

use crate::config::Config;

mod events;
mod health;
mod media;
mod prayer;
mod signup;
mod team;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: SqlitePool,
    pub events: ccswing_event::Query,
    pub team: ccswing_team::Query,
    pub signup: SignupPipeline,
    pub prayer: PrayerService,
    pub media: Arc<dyn MediaSource>,
}

impl AppState {
    pub fn new(
        config: Config,
        pool: SqlitePool,
        signup_notifier: Arc<dyn SignupNotifier>,
        prayer_notifier: Arc<dyn PrayerNotifier>,
        media: Arc<dyn MediaSource>,
    ) -> Self {
        let signup = SignupPipeline::new(
            Arc::new(ccswing_signup::Query(pool.clone())),
            signup_notifier,
        )
        .store_timeout(Duration::from_secs(config.signup.store_timeout_secs))
        .notify_timeout(Duration::from_secs(config.signup.notify_timeout_secs));

        let prayer = PrayerService::new(
            prayer_notifier,
            Duration::from_secs(config.signup.notify_timeout_secs),
        );

        Self {
            events: ccswing_event::Query(pool.clone()),
            team: ccswing_team::Query(pool.clone()),
            config,
            pool,
            signup,
            prayer,
            media,
        }
    }

    /// The studio's calendar day, every eligibility check is made against it.
    pub fn today(&self) -> Date {
        ccswing_shared::today(&self.config.studio.timezone)
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/api/events", get(events::list))
                .route("/api/events/spotlight", get(events::spotlight))
                .route("/api/events/calendar", get(events::calendar))
                .route("/api/events/carousel", get(events::carousel))
                .route("/api/event-signup", post(signup::action))
                .route("/api/prayer", post(prayer::action))
                .route("/api/media", get(media::list))
                .route("/api/media/{id}", get(media::fetch))
                .route("/api/weekly-photo", get(media::weekly_photo))
                .route("/api/team", get(team::list))
                .route("/api/team/{id}", get(team::find))
                .with_state(app_state),
        )
}
