use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use transcript_relay::{
    create_router, AppState, Config, GoogleSpeech, SpeechCredentials, WebhookNotifier,
};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "transcript-relay", about = "Relay uploaded audio to a speech API and webhook")]
struct Args {
    /// Configuration file (without extension)
    #[arg(long, default_value = "config/transcript-relay")]
    config: String,

    /// Override the listen port from the config file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut cfg = Config::load(&args.config)?;
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    // Credential failure is not fatal: the service still comes up, and
    // transcription reports a credentials error at call time.
    let credentials = match SpeechCredentials::from_env() {
        Ok(creds) => {
            info!("Loaded speech credentials");
            Some(creds)
        }
        Err(e) => {
            error!("Could not load speech credentials: {}", e);
            None
        }
    };

    let speech = Arc::new(GoogleSpeech::new(cfg.speech.clone(), credentials)?);

    if cfg.webhook.url.is_empty() {
        error!("No webhook URL configured, transcripts will not be relayed");
    }
    let notifier = Arc::new(WebhookNotifier::new(cfg.webhook.url.clone())?);

    let state = AppState::new(speech, notifier);
    let router = create_router(state, &cfg.service.http.static_dir);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
