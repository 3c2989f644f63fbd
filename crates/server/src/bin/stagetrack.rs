use server::directory::DirectoryBackend;
use server::state::AppState;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    server::telemetry::init_tracing();

    let config = server::config::load_config();
    if config.features.telemetry {
        server::telemetry::init_telemetry();
    }
    server::health::record_start_time();

    let mut directory_settings = config.directory.clone();
    if let Ok(path) = std::env::var("DIRECTORY_PATH") {
        directory_settings.path = path;
    }
    if let Ok(url) = std::env::var("DIRECTORY_URL") {
        directory_settings.base_url = Some(url);
    }
    let directory = DirectoryBackend::from_settings(&directory_settings)?;
    let backend = directory.kind();
    let state = AppState::new(directory, config.report.clone());

    let mut router = server::openapi::api_router(state);
    if config.features.telemetry {
        router = router.layer(server::telemetry::OtelTraceLayer);
    }
    let router = router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, directory = backend, page_breaks = ?config.report.page_breaks, "stagetrack listening");

    axum::serve(listener, router).await?;
    Ok(())
}
