use ccswing_signup::{Confirmation, SignupNotifier};

use crate::{EmailService, template::{Email, render}};

#[derive(askama::Template)]
#[template(path = "signup-confirmation.html")]
pub struct SignupConfirmationHtmlTemplate<'a> {
    pub studio: &'a str,
    pub first_name: &'a str,
    pub event_title: &'a str,
    pub event_date: String,
    pub event_time: Option<&'a str>,
    pub event_location: &'a str,
    pub payment_method: String,
}

#[derive(askama::Template)]
#[template(path = "signup-confirmation.txt")]
pub struct SignupConfirmationPlainTemplate<'a> {
    pub studio: &'a str,
    pub first_name: &'a str,
    pub event_title: &'a str,
    pub event_date: String,
    pub event_time: Option<&'a str>,
    pub event_location: &'a str,
    pub payment_method: String,
}

pub fn confirmation_email(studio: &str, confirmation: &Confirmation) -> anyhow::Result<Email> {
    let event_date = ccswing_shared::format_long_date(confirmation.event_date);
    let event_time = confirmation.event_time.as_deref();

    let html = render(&SignupConfirmationHtmlTemplate {
        studio,
        first_name: &confirmation.first_name,
        event_title: &confirmation.event_title,
        event_date: event_date.to_owned(),
        event_time,
        event_location: &confirmation.event_location,
        payment_method: confirmation.payment_method.to_string(),
    })?;

    let plain = render(&SignupConfirmationPlainTemplate {
        studio,
        first_name: &confirmation.first_name,
        event_title: &confirmation.event_title,
        event_date,
        event_time,
        event_location: &confirmation.event_location,
        payment_method: confirmation.payment_method.to_string(),
    })?;

    Ok(Email {
        subject: format!("{studio} Signup — {}", confirmation.event_title),
        plain,
        html: Some(html),
    })
}

/// Sends signup confirmations to the submitter.
#[derive(Clone)]
pub struct SignupMailer {
    service: EmailService,
    studio: String,
}

impl SignupMailer {
    pub fn new(service: EmailService, studio: impl Into<String>) -> Self {
        Self {
            service,
            studio: studio.into(),
        }
    }
}

#[async_trait::async_trait]
impl SignupNotifier for SignupMailer {
    async fn send_confirmation(&self, confirmation: &Confirmation) -> anyhow::Result<()> {
        let email = confirmation_email(&self.studio, confirmation)?;
        self.service.send(&confirmation.to, email).await
    }
}
