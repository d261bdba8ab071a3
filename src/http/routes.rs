use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

// Uploaded clips can be several MB; raise the default extractor cap.
const AUDIO_UPLOAD_LIMIT_BYTES: usize = 32 * 1024 * 1024;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let index = ServeFile::new(Path::new(static_dir).join("index.html"));

    Router::new()
        // Landing page
        .route_service("/", index)
        // Health check
        .route("/health", get(handlers::health_check))
        // Transcription control
        .route(
            "/start_transcription",
            post(handlers::start_transcription)
                .layer(DefaultBodyLimit::max(AUDIO_UPLOAD_LIMIT_BYTES)),
        )
        .route("/stop_transcription", get(handlers::stop_transcription))
        // Transcript queries
        .route("/get_final_transcript", get(handlers::get_final_transcript))
        .route("/clear_transcript", get(handlers::clear_transcript))
        // The landing page may be served from elsewhere during development
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
