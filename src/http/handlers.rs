use super::state::AppState;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /start_transcription
/// Transcribe one uploaded clip and append it to the session
pub async fn start_transcription(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    // Pull the `audio` field out of the multipart body. Session state is
    // untouched until we actually have a clip.
    let mut audio: Option<Bytes> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("audio") {
                    match field.bytes().await {
                        Ok(bytes) => {
                            audio = Some(bytes);
                            break;
                        }
                        Err(e) => {
                            return error_response(
                                StatusCode::BAD_REQUEST,
                                format!("Could not read audio field: {}", e),
                            );
                        }
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid multipart body: {}", e),
                );
            }
        }
    }

    let Some(audio) = audio else {
        return error_response(StatusCode::BAD_REQUEST, "No audio file uploaded");
    };

    info!("Transcribing uploaded clip ({} bytes)", audio.len());

    // Enter the transcribing state before calling out; a start from idle
    // discards the previous session's segments.
    {
        let mut session = state.session.write().await;
        session.begin();
    }

    match state.speech.recognize(&audio).await {
        Ok(Some(transcript)) => {
            let mut session = state.session.write().await;
            session.append(transcript.clone());
            (StatusCode::OK, Json(TranscriptResponse { transcript })).into_response()
        }
        Ok(None) => error_response(StatusCode::BAD_REQUEST, "No transcript generated"),
        Err(e) => {
            // Credentials, transport, API and decode failures are all 500s,
            // but each keeps its own message so logs stay diagnosable.
            error!("Transcription failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// GET /stop_transcription
/// Leave the transcribing state; relay the transcript if any was accumulated
pub async fn stop_transcription(State(state): State<AppState>) -> Response {
    let full_transcript = {
        let mut session = state.session.write().await;
        session.finish()
    };

    if let Some(transcript) = full_transcript {
        // Fire and forget: the HTTP response does not wait for, or reflect,
        // the webhook outcome.
        let notifier = Arc::clone(&state.notifier);
        tokio::spawn(async move {
            match notifier.notify(&transcript).await {
                Ok(receipt) => {
                    info!("Transcript relayed, webhook returned {}", receipt.status);
                }
                Err(e) => {
                    error!("Error sending transcript to webhook: {}", e);
                }
            }
        });
    }

    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "Transcription stopped".to_string(),
        }),
    )
        .into_response()
}

/// GET /get_final_transcript
/// The accumulated transcript so far (may be empty); no state change
pub async fn get_final_transcript(State(state): State<AppState>) -> Response {
    let transcript = {
        let session = state.session.read().await;
        session.joined()
    };

    (StatusCode::OK, Json(TranscriptResponse { transcript })).into_response()
}

/// GET /clear_transcript
/// Discard accumulated segments; the transcribing flag is untouched
pub async fn clear_transcript(State(state): State<AppState>) -> Response {
    {
        let mut session = state.session.write().await;
        session.clear();
    }

    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "Transcript cleared".to_string(),
        }),
    )
        .into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
