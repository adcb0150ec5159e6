use time::Date;

use crate::{PaymentMethod, SignupRecord};

/// Everything a confirmation message needs, detached from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub to: String,
    pub first_name: String,
    pub last_name: String,
    pub event_title: String,
    pub event_date: Date,
    pub event_time: Option<String>,
    pub event_location: String,
    pub payment_method: PaymentMethod,
}

impl Confirmation {
    pub fn new(record: &SignupRecord, event_time: Option<String>) -> Self {
        Self {
            to: record.email.to_owned(),
            first_name: record.first_name.to_owned(),
            last_name: record.last_name.to_owned(),
            event_title: record.event_title.to_owned(),
            event_date: record.event_date,
            event_time,
            event_location: record.event_location.to_owned(),
            payment_method: record.payment_method,
        }
    }
}

#[async_trait::async_trait]
pub trait SignupNotifier: Send + Sync {
    async fn send_confirmation(&self, confirmation: &Confirmation) -> anyhow::Result<()>;
}
