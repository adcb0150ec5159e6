use ccswing_prayer::{PrayerNotifier, PrayerRequest};

use crate::{EmailService, template::{Email, render}};

#[derive(askama::Template)]
#[template(path = "prayer-request.txt")]
pub struct PrayerRequestPlainTemplate<'a> {
    pub sender: &'a str,
    pub message: &'a str,
}

pub fn prayer_email(studio: &str, request: &PrayerRequest) -> anyhow::Result<Email> {
    let plain = render(&PrayerRequestPlainTemplate {
        sender: request.sender(),
        message: &request.message,
    })?;

    Ok(Email {
        subject: format!("New Prayer Request - {studio}"),
        plain,
        html: None,
    })
}

/// Forwards prayer requests to the prayer team inbox.
#[derive(Clone)]
pub struct PrayerMailer {
    service: EmailService,
    studio: String,
    to: String,
}

impl PrayerMailer {
    pub fn new(service: EmailService, studio: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            service,
            studio: studio.into(),
            to: to.into(),
        }
    }
}

#[async_trait::async_trait]
impl PrayerNotifier for PrayerMailer {
    async fn send_prayer(&self, request: &PrayerRequest) -> anyhow::Result<()> {
        let email = prayer_email(&self.studio, request)?;
        self.service.send(&self.to, email).await
    }
}
