use mentor::api::{self, app_state::AppState};
use mentor::config::loader::ConfigLoader;
use mentor::observability::{AppMetrics, ObservabilityState, create_observability_router};
use mentor::services::dialogue::DialogueEngine;
use mentor::services::session::create_session_service;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!("Configuration loaded successfully");

    // Check if we should run as a local console chat instead of a server
    if std::env::var("MENTOR_CONSOLE").is_ok() {
        info!("Starting Mentor in console mode...");
        return run_console(config.engine.clone());
    }

    info!("Starting Mentor...");

    let session_service = create_session_service(config.engine.clone());
    info!("Session service initialized");

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(session_service, metrics.clone(), config.clone());
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state).merge(api_router);
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Run a single dialogue session over stdin/stdout.
fn run_console(engine_config: mentor::config::EngineConfig) -> anyhow::Result<()> {
    let mut engine = DialogueEngine::new(engine_config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("{}", DialogueEngine::welcome_message());
    println!("(type 'exit' to quit)");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye, {}! Stay safe online.", engine.profile().name);
            break;
        }

        let outcome = engine.process_turn(input);
        println!("[{}] {}", outcome.sentiment, outcome.reply);
    }

    Ok(())
}
