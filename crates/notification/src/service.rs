//! Email delivery over SMTP using lettre

use std::time::Duration;

use lettre::{
    Message, SmtpTransport, Transport,
    message::{MultiPart, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::Email;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_address: String,
    /// Inbox that receives prayer requests.
    pub prayer_address: String,
}

#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
}

impl EmailService {
    /// `timeout` bounds every network step of the SMTP session, so a send
    /// given up on by its caller does not deliver later.
    pub fn new(config: &EmailConfig, timeout: Duration) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(timeout))
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .timeout(Some(timeout))
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }

    /// Sends an email, multipart when it carries an HTML body.
    pub async fn send(&self, to: impl Into<String>, email: Email) -> anyhow::Result<()> {
        let to = to.into();

        tracing::info!(to = %to, subject = %email.subject, "Sending email");

        let builder = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(email.subject);

        let message = match email.html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(email.plain, html))?,
            None => builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(email.plain)?,
        };

        // The SMTP transport blocks; keep it off the runtime workers.
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
