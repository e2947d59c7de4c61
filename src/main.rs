use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cabinet_ledger::config::Settings;
use cabinet_ledger::shell::http::router;
use cabinet_ledger::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = Settings::from_env();
    let state = AppState::in_memory();
    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    info!(host = %settings.host, port = settings.port, "cabinet_ledger listening");
    axum::serve(listener, app).await?;
    Ok(())
}
