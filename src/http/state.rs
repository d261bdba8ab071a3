use crate::session::TranscriptSession;
use crate::stt::SpeechBackend;
use crate::webhook::TranscriptNotifier;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The single process-wide transcription session.
    pub session: Arc<RwLock<TranscriptSession>>,

    /// Speech recognizer for uploaded clips.
    pub speech: Arc<dyn SpeechBackend>,

    /// Sink for the final joined transcript.
    pub notifier: Arc<dyn TranscriptNotifier>,
}

impl AppState {
    pub fn new(speech: Arc<dyn SpeechBackend>, notifier: Arc<dyn TranscriptNotifier>) -> Self {
        Self {
            session: Arc::new(RwLock::new(TranscriptSession::new())),
            speech,
            notifier,
        }
    }
}
