//! Webhook notifier: relays the final joined transcript to an external
//! automation endpoint. Single POST, no retry, no signature; the stop
//! handler fires it on a detached task and never waits for the outcome.

mod notifier;

pub use notifier::{TranscriptNotifier, WebhookNotifier, WebhookReceipt};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("no webhook URL configured")]
    NotConfigured,
    #[error("webhook request failed: {0}")]
    Transport(String),
}
