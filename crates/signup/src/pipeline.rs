use std::{sync::Arc, time::Duration};

use ccswing_event::Event;
use serde::Serialize;
use strum::{AsRefStr, Display};
use validator::ValidationErrors;

use crate::{Confirmation, SignupForm, SignupNotifier, SignupRecord, SignupStore};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupState {
    Idle,
    Validating,
    Rejected,
    Persisting,
    PersistFailed,
    Persisted,
    Notifying,
    NotifyFailed,
    Completed,
}

impl SignupState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Rejected | Self::PersistFailed | Self::NotifyFailed | Self::Completed
        )
    }
}

/// Proof that a signup was durably recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupReceipt {
    pub signup_id: String,
    pub event_id: i64,
    pub event_title: String,
    pub email: String,
}

impl From<&SignupRecord> for SignupReceipt {
    fn from(record: &SignupRecord) -> Self {
        Self {
            signup_id: record.id.to_owned(),
            event_id: record.event_id,
            event_title: record.event_title.to_owned(),
            email: record.email.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("signup rejected")]
    Rejected(ValidationErrors),

    #[error("signup not saved")]
    NotSaved(#[source] anyhow::Error),

    #[error("confirmation not sent")]
    ConfirmationNotSent {
        receipt: SignupReceipt,
        #[source]
        source: anyhow::Error,
    },
}

impl SignupError {
    pub fn state(&self) -> SignupState {
        match self {
            Self::Rejected(_) => SignupState::Rejected,
            Self::NotSaved(_) => SignupState::PersistFailed,
            Self::ConfirmationNotSent { .. } => SignupState::NotifyFailed,
        }
    }

    /// The signup exists in the store even though the call failed.
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::ConfirmationNotSent { .. })
    }
}

/// Validate, persist, then confirm. The confirmation is only attempted once
/// the record is stored and a failed confirmation never undoes the record.
#[derive(Clone)]
pub struct SignupPipeline {
    store: Arc<dyn SignupStore>,
    notifier: Arc<dyn SignupNotifier>,
    store_timeout: Duration,
    notify_timeout: Duration,
}

impl SignupPipeline {
    pub fn new(store: Arc<dyn SignupStore>, notifier: Arc<dyn SignupNotifier>) -> Self {
        Self {
            store,
            notifier,
            store_timeout: Duration::from_secs(10),
            notify_timeout: Duration::from_secs(10),
        }
    }

    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    pub async fn submit(
        &self,
        form: SignupForm,
        event: &Event,
    ) -> Result<SignupReceipt, SignupError> {
        transition(event.id, SignupState::Idle, SignupState::Validating);

        let signup = match form.validate_signup() {
            Ok(signup) => signup,
            Err(errors) => {
                transition(event.id, SignupState::Validating, SignupState::Rejected);
                return Err(SignupError::Rejected(errors));
            }
        };

        transition(event.id, SignupState::Validating, SignupState::Persisting);

        let record = SignupRecord::new(&signup, event);
        let stored = match tokio::time::timeout(self.store_timeout, self.store.insert_signup(&record)).await {
            Ok(stored) => stored,
            Err(_) => Err(anyhow::anyhow!(
                "storing signup timed out after {:?}",
                self.store_timeout
            )),
        };

        if let Err(err) = stored {
            tracing::error!(event_id = event.id, err = %err, "Failed to store signup");
            transition(event.id, SignupState::Persisting, SignupState::PersistFailed);
            return Err(SignupError::NotSaved(err));
        }

        transition(event.id, SignupState::Persisting, SignupState::Persisted);
        let receipt = SignupReceipt::from(&record);

        transition(event.id, SignupState::Persisted, SignupState::Notifying);

        let confirmation = Confirmation::new(&record, event.time.to_owned());
        let sent = match tokio::time::timeout(
            self.notify_timeout,
            self.notifier.send_confirmation(&confirmation),
        )
        .await
        {
            Ok(sent) => sent,
            Err(_) => Err(anyhow::anyhow!(
                "sending confirmation timed out after {:?}",
                self.notify_timeout
            )),
        };

        if let Err(err) = sent {
            tracing::warn!(
                event_id = event.id,
                signup_id = %receipt.signup_id,
                err = %err,
                "Signup stored but confirmation was not sent"
            );
            transition(event.id, SignupState::Notifying, SignupState::NotifyFailed);
            return Err(SignupError::ConfirmationNotSent {
                receipt,
                source: err,
            });
        }

        transition(event.id, SignupState::Notifying, SignupState::Completed);
        tracing::info!(event_id = event.id, signup_id = %receipt.signup_id, "Signup completed");

        Ok(receipt)
    }
}

fn transition(event_id: i64, from: SignupState, to: SignupState) {
    tracing::debug!(event_id, from = from.as_ref(), to = to.as_ref(), "Signup transition");
}
