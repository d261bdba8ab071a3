use super::{SpeechBackend, SttError};
use crate::config::SpeechConfig;
use crate::credentials::SpeechCredentials;
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

const RECOGNIZE_PATH: &str = "/v1p1beta1/speech:recognize";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Google Cloud Speech-to-Text client for single-clip recognition.
///
/// Configuration is fixed at construction: the front end uploads
/// Opus-in-WebM clips recorded at 48 kHz, US English, automatic punctuation,
/// and the `video` model (tuned for noisy audio/video sources).
pub struct GoogleSpeech {
    client: reqwest::Client,
    credentials: Option<SpeechCredentials>,
    endpoint: String,
    config: SpeechConfig,
}

#[derive(Debug, Serialize)]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    encoding: &'static str,
    sample_rate_hertz: u32,
    language_code: String,
    enable_automatic_punctuation: bool,
    model: String,
}

#[derive(Debug, Serialize)]
struct RecognitionAudio {
    /// Base64-encoded clip bytes.
    content: String,
}

#[derive(Debug, Default, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

impl GoogleSpeech {
    /// Build the client. `credentials` may be absent (startup continues when
    /// the credential loader failed); recognition then errors at call time.
    pub fn new(
        config: SpeechConfig,
        credentials: Option<SpeechCredentials>,
    ) -> Result<Self, SttError> {
        let endpoint = credentials
            .as_ref()
            .and_then(|c| c.endpoint.clone())
            .unwrap_or_else(|| config.endpoint.clone());

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SttError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            credentials,
            endpoint,
            config,
        })
    }

    fn request_body(&self, audio: &[u8]) -> RecognizeRequest {
        RecognizeRequest {
            config: RecognitionConfig {
                encoding: "WEBM_OPUS",
                sample_rate_hertz: self.config.sample_rate_hertz,
                language_code: self.config.language.clone(),
                enable_automatic_punctuation: true,
                model: self.config.model.clone(),
            },
            audio: RecognitionAudio {
                content: base64::engine::general_purpose::STANDARD.encode(audio),
            },
        }
    }
}

/// Join the top alternative of each result with single spaces, in result
/// order. `None` when the response carried no usable text.
fn join_transcripts(response: RecognizeResponse) -> Option<String> {
    let transcripts: Vec<&str> = response
        .results
        .iter()
        .filter_map(|r| r.alternatives.first())
        .map(|a| a.transcript.as_str())
        .filter(|t| !t.is_empty())
        .collect();

    if transcripts.is_empty() {
        None
    } else {
        Some(transcripts.join(" "))
    }
}

#[async_trait]
impl SpeechBackend for GoogleSpeech {
    async fn recognize(&self, audio: &[u8]) -> Result<Option<String>, SttError> {
        if audio.is_empty() {
            debug!("Empty clip, skipping recognize call");
            return Ok(None);
        }

        let creds = self
            .credentials
            .as_ref()
            .ok_or_else(|| SttError::Credentials("no credential document loaded".to_string()))?;

        let url = format!("{}{}", self.endpoint.trim_end_matches('/'), RECOGNIZE_PATH);
        let body = self.request_body(audio);

        debug!("Sending recognize request ({} audio bytes)", audio.len());

        let response = self
            .client
            .post(&url)
            .query(&[("key", creds.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| SttError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SttError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| SttError::Decode(e.to_string()))?;

        let transcript = join_transcripts(parsed);
        match &transcript {
            Some(text) => info!("Recognized {} characters", text.len()),
            None => info!("No speech recognized in clip"),
        }

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SpeechConfig {
        SpeechConfig {
            endpoint: "https://speech.googleapis.com".to_string(),
            language: "en-US".to_string(),
            sample_rate_hertz: 48000,
            model: "video".to_string(),
        }
    }

    #[test]
    fn request_body_uses_fixed_recognizer_settings() {
        let speech = GoogleSpeech::new(test_config(), None).unwrap();
        let body = speech.request_body(b"abc");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["config"]["encoding"], "WEBM_OPUS");
        assert_eq!(json["config"]["sampleRateHertz"], 48000);
        assert_eq!(json["config"]["languageCode"], "en-US");
        assert_eq!(json["config"]["enableAutomaticPunctuation"], true);
        assert_eq!(json["config"]["model"], "video");
        // "abc" in standard base64
        assert_eq!(json["audio"]["content"], "YWJj");
    }

    #[test]
    fn join_takes_top_alternative_of_each_result() {
        let response: RecognizeResponse = serde_json::from_str(
            r#"{
                "results": [
                    {"alternatives": [{"transcript": "hello world"}, {"transcript": "hello word"}]},
                    {"alternatives": [{"transcript": "how are you"}]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            join_transcripts(response).as_deref(),
            Some("hello world how are you")
        );
    }

    #[test]
    fn join_treats_empty_results_as_no_speech() {
        let response: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(join_transcripts(response), None);

        let response: RecognizeResponse =
            serde_json::from_str(r#"{"results": [{"alternatives": [{"transcript": ""}]}]}"#)
                .unwrap();
        assert_eq!(join_transcripts(response), None);
    }

    #[tokio::test]
    async fn recognize_without_credentials_is_a_distinct_error() {
        let speech = GoogleSpeech::new(test_config(), None).unwrap();
        let err = speech.recognize(b"audio").await.unwrap_err();
        assert!(matches!(err, SttError::Credentials(_)));
    }

    #[tokio::test]
    async fn empty_clip_short_circuits_to_no_speech() {
        let speech = GoogleSpeech::new(test_config(), None).unwrap();
        assert_eq!(speech.recognize(&[]).await.unwrap(), None);
    }
}
