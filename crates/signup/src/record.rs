use ccswing_event::Event;
use sqlx::prelude::FromRow;
use time::{Date, OffsetDateTime};

use crate::{PaymentMethod, PriorAttendance, ReferralSource, ValidSignup};

/// A persisted signup. Event details are copied at submission time so the
/// record still reads correctly if the event is edited later.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupRecord {
    pub id: String,
    pub event_id: i64,
    pub event_title: String,
    pub event_date: Date,
    pub event_location: String,
    pub event_cost: Option<f64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub prior_attendance: PriorAttendance,
    pub referral_source: Option<ReferralSource>,
    pub payment_method: PaymentMethod,
    pub accept_liability: bool,
    pub accept_payment: bool,
    pub created_at: OffsetDateTime,
}

impl SignupRecord {
    pub fn new(signup: &ValidSignup, event: &Event) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            event_id: event.id,
            event_title: event.title.to_owned(),
            event_date: event.date,
            event_location: event.location.to_owned(),
            event_cost: event.cost,
            first_name: signup.first_name.to_owned(),
            last_name: signup.last_name.to_owned(),
            email: signup.email.to_owned(),
            prior_attendance: signup.prior_attendance,
            referral_source: signup.referral_source,
            payment_method: signup.payment_method,
            accept_liability: true,
            accept_payment: true,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Default, FromRow)]
pub struct SignupRow {
    pub id: String,
    pub event_id: i64,
    pub event_title: String,
    pub event_date: String,
    pub event_location: String,
    pub event_cost: Option<f64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub been_before: String,
    pub heard_about_us: Option<String>,
    pub payment_method: String,
    pub accept_liability: bool,
    pub accept_payment: bool,
    pub created_at: i64,
}

impl TryFrom<SignupRow> for SignupRecord {
    type Error = ccswing_shared::Error;

    fn try_from(row: SignupRow) -> Result<Self, Self::Error> {
        let event_date = ccswing_shared::parse_local_date(&row.event_date)?;

        let Ok(prior_attendance) = row.been_before.parse() else {
            ccswing_shared::bail!("signup {} has unknown attendance {:?}", row.id, row.been_before);
        };

        let Ok(payment_method) = row.payment_method.parse() else {
            ccswing_shared::bail!("signup {} has unknown payment {:?}", row.id, row.payment_method);
        };

        let created_at = OffsetDateTime::from_unix_timestamp(row.created_at)
            .map_err(|e| ccswing_shared::Error::Server(e.to_string()))?;

        Ok(Self {
            id: row.id,
            event_id: row.event_id,
            event_title: row.event_title,
            event_date,
            event_location: row.event_location,
            event_cost: row.event_cost,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            prior_attendance,
            referral_source: row.heard_about_us.and_then(|v| v.parse().ok()),
            payment_method,
            accept_liability: row.accept_liability,
            accept_payment: row.accept_payment,
            created_at,
        })
    }
}
