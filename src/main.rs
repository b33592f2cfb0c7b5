use std::sync::Arc;

use career_compass::advisor::Advisor;
use career_compass::config::AppConfig;
use career_compass::error::ConfigError;
use career_compass::llm::GeminiClient;
use career_compass::session::SessionController;
use career_compass::ui;

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

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        match &e {
            ConfigError::MissingEnvVar { key, hint } => {
                eprintln!("Error: {key} not set");
                eprintln!("  {hint}");
            }
            other => eprintln!("Error: {other}"),
        }
        std::process::exit(1);
    });

    eprintln!("🎓 Career Compass v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Reasoning model: {}", config.reasoning_model);
    eprintln!("   Pick an option and press Enter. /quit to exit.\n");

    let provider = Arc::new(GeminiClient::new(&config)?);
    let advisor = Arc::new(Advisor::new(provider).with_reasoning_model(&config.reasoning_model));
    let controller = SessionController::new(advisor);

    ui::run(controller).await
}
