//! Transcription adapter: one audio clip in, one transcript string out.
//!
//! `SpeechBackend` is the seam the HTTP layer talks to; `GoogleSpeech` is
//! the production implementation. "No speech detected" (`Ok(None)`) is kept
//! distinct from every failure mode so callers can tell a quiet clip from a
//! broken integration.

mod google;

pub use google::GoogleSpeech;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SttError {
    #[error("speech credentials not configured: {0}")]
    Credentials(String),
    #[error("speech request failed: {0}")]
    Transport(String),
    #[error("speech API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("could not decode speech API response: {0}")]
    Decode(String),
}

/// A speech recognizer that turns one uploaded clip into text.
#[async_trait]
pub trait SpeechBackend: Send + Sync {
    /// Transcribe one clip. `Ok(None)` means the call succeeded but no
    /// speech was recognized; every failure is a distinct `SttError`.
    async fn recognize(&self, audio: &[u8]) -> Result<Option<String>, SttError>;
}
