use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub speech: SpeechConfig,
    pub webhook: WebhookConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Directory holding the static landing page.
    pub static_dir: String,
}

/// Recognizer configuration. Encoding, sample rate, language, and model are
/// service constants, not caller-supplied: the front end uploads
/// Opus-in-WebM clips recorded at 48 kHz.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Base URL of the speech API (overridable for tests / private proxies).
    pub endpoint: String,
    pub language: String,
    pub sample_rate_hertz: u32,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
}

impl Config {
    /// Load configuration: built-in defaults, optionally overlaid by a TOML
    /// file at `path`, then by the `PORT` and `WEBHOOK_URL` environment
    /// variables.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "transcript-relay")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 8080)?
            .set_default("service.http.static_dir", "static")?
            .set_default("speech.endpoint", "https://speech.googleapis.com")?
            .set_default("speech.language", "en-US")?
            .set_default("speech.sample_rate_hertz", 48000)?
            .set_default("speech.model", "video")?
            .set_default("webhook.url", "")?
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            cfg.service.http.port = port.parse()?;
        }
        if let Ok(url) = std::env::var("WEBHOOK_URL") {
            cfg.webhook.url = url;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_a_file() {
        let cfg = Config::load("config/does-not-exist").unwrap();
        assert_eq!(cfg.service.http.port, 8080);
        assert_eq!(cfg.speech.language, "en-US");
        assert_eq!(cfg.speech.sample_rate_hertz, 48000);
        assert_eq!(cfg.speech.model, "video");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relay.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[webhook]\nurl = \"https://hooks.example/abc\"").unwrap();
        writeln!(f, "[service.http]\nport = 9000").unwrap();

        let cfg = Config::load(path.with_extension("").to_str().unwrap()).unwrap();
        assert_eq!(cfg.webhook.url, "https://hooks.example/abc");
        assert_eq!(cfg.service.http.port, 9000);
        // Untouched sections keep their defaults
        assert_eq!(cfg.speech.model, "video");
    }
}
