use std::sync::Arc;

use anyhow::Context;

use segment_advisor::advice::AdviceService;
use segment_advisor::config::AppConfig;
use segment_advisor::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    eprintln!("📊 Segment Advisor v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.ai.model);
    eprintln!(
        "   API key: {}",
        if config.ai.api_key.is_present() {
            "configured"
        } else {
            "missing (advice requests will return 500)"
        }
    );
    eprintln!("   Classification backend: {}", config.classification.api_host);
    eprintln!("   Advice API: http://{}/api/ai-advice\n", config.bind_addr);

    let service = Arc::new(AdviceService::from_config(&config));
    let app = server::app(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "Advice server started");
    axum::serve(listener, app).await?;

    Ok(())
}
