use std::{sync::Arc, time::Duration};

use validator::ValidationErrors;

use crate::{PrayerForm, PrayerRequest};

#[async_trait::async_trait]
pub trait PrayerNotifier: Send + Sync {
    async fn send_prayer(&self, request: &PrayerRequest) -> anyhow::Result<()>;
}

#[derive(Debug, thiserror::Error)]
pub enum PrayerError {
    #[error("prayer request rejected")]
    Rejected(ValidationErrors),

    #[error("prayer request not sent")]
    NotSent(#[source] anyhow::Error),
}

/// Prayer requests are forwarded by email only, nothing is stored.
#[derive(Clone)]
pub struct PrayerService {
    notifier: Arc<dyn PrayerNotifier>,
    timeout: Duration,
}

impl PrayerService {
    pub fn new(notifier: Arc<dyn PrayerNotifier>, timeout: Duration) -> Self {
        Self { notifier, timeout }
    }

    pub async fn submit(&self, form: PrayerForm) -> Result<(), PrayerError> {
        let request = form.validate_prayer().map_err(PrayerError::Rejected)?;

        let sent = match tokio::time::timeout(self.timeout, self.notifier.send_prayer(&request)).await
        {
            Ok(sent) => sent,
            Err(_) => Err(anyhow::anyhow!("sending prayer request timed out")),
        };

        if let Err(err) = sent {
            tracing::error!(err = %err, "Failed to send prayer request");
            return Err(PrayerError::NotSent(err));
        }

        tracing::info!(anonymous = request.anonymous, "Prayer request sent");

        Ok(())
    }
}
