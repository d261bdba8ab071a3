//! HTTP surface tying the adapter, notifier, and session together:
//! - GET / - static landing page
//! - POST /start_transcription - transcribe an uploaded clip (multipart `audio`)
//! - GET /stop_transcription - stop and relay the transcript to the webhook
//! - GET /get_final_transcript - accumulated transcript so far
//! - GET /clear_transcript - discard accumulated segments
//! - GET /health - health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
