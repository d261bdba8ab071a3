use serde::Deserialize;
use thiserror::Error;

/// Name of the environment variable holding the credential JSON document.
pub const CREDENTIALS_ENV: &str = "SPEECH_CREDENTIALS_JSON";

/// Credential material for the speech API, parsed once at startup and held
/// in memory for the process lifetime. Never written to disk, never
/// refreshed or rotated.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechCredentials {
    pub api_key: String,
    #[serde(default)]
    pub project_id: Option<String>,
    /// Per-credential endpoint override (private proxy deployments).
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("{CREDENTIALS_ENV} is not set")]
    Missing,
    #[error("invalid credential document: {0}")]
    Invalid(String),
}

impl SpeechCredentials {
    /// Read credentials from `SPEECH_CREDENTIALS_JSON`.
    ///
    /// Failure here is non-fatal to startup: the caller logs it and the
    /// transcription adapter reports a credentials error at call time.
    pub fn from_env() -> Result<Self, CredentialsError> {
        let raw = std::env::var(CREDENTIALS_ENV).map_err(|_| CredentialsError::Missing)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CredentialsError> {
        let creds: SpeechCredentials =
            serde_json::from_str(raw).map_err(|e| CredentialsError::Invalid(e.to_string()))?;
        if creds.api_key.is_empty() {
            return Err(CredentialsError::Invalid("api_key is empty".to_string()));
        }
        Ok(creds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let creds = SpeechCredentials::from_json(r#"{"api_key": "k-123"}"#).unwrap();
        assert_eq!(creds.api_key, "k-123");
        assert!(creds.project_id.is_none());
        assert!(creds.endpoint.is_none());
    }

    #[test]
    fn parses_full_document() {
        let creds = SpeechCredentials::from_json(
            r#"{"api_key": "k-123", "project_id": "demo", "endpoint": "https://speech.internal"}"#,
        )
        .unwrap();
        assert_eq!(creds.project_id.as_deref(), Some("demo"));
        assert_eq!(creds.endpoint.as_deref(), Some("https://speech.internal"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SpeechCredentials::from_json("not json").unwrap_err();
        assert!(matches!(err, CredentialsError::Invalid(_)));
    }

    #[test]
    fn rejects_empty_api_key() {
        let err = SpeechCredentials::from_json(r#"{"api_key": ""}"#).unwrap_err();
        assert!(matches!(err, CredentialsError::Invalid(_)));
    }
}
