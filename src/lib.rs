pub mod config;
pub mod credentials;
pub mod http;
pub mod session;
pub mod stt;
pub mod webhook;

pub use config::Config;
pub use credentials::{CredentialsError, SpeechCredentials, CREDENTIALS_ENV};
pub use http::{create_router, AppState};
pub use session::TranscriptSession;
pub use stt::{GoogleSpeech, SpeechBackend, SttError};
pub use webhook::{NotifyError, TranscriptNotifier, WebhookNotifier, WebhookReceipt};
