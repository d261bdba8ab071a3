use super::NotifyError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a delivered notification: the webhook's status and body are
/// recorded for the log, nothing else is done with them.
#[derive(Debug, Clone)]
pub struct WebhookReceipt {
    pub status: u16,
    pub body: String,
}

/// Sink for final transcripts. The HTTP layer talks to this trait so tests
/// can record notifications instead of calling out.
#[async_trait]
pub trait TranscriptNotifier: Send + Sync {
    async fn notify(&self, transcript: &str) -> Result<WebhookReceipt, NotifyError>;
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    transcript: &'a str,
    /// Human-readable local time, `YYYY-MM-DD HH:MM:SS`.
    timestamp: String,
}

impl<'a> WebhookPayload<'a> {
    fn new(transcript: &'a str) -> Self {
        Self {
            transcript,
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Posts the transcript payload to a fixed URL with a JSON content type.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl TranscriptNotifier for WebhookNotifier {
    async fn notify(&self, transcript: &str) -> Result<WebhookReceipt, NotifyError> {
        if self.url.is_empty() {
            return Err(NotifyError::NotConfigured);
        }

        let payload = WebhookPayload::new(transcript);

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        info!("Webhook response status: {}", status);
        info!("Webhook response: {}", body);

        Ok(WebhookReceipt { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_transcript_and_formatted_timestamp() {
        let payload = WebhookPayload::new("hello world how are you");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["transcript"], "hello world how are you");

        let ts = json["timestamp"].as_str().unwrap();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }

    #[tokio::test]
    async fn unconfigured_url_is_reported() {
        let notifier = WebhookNotifier::new("").unwrap();
        let err = notifier.notify("hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::NotConfigured));
    }
}
