mod api;
mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let api = api::ApiClient::new(config.api_base_url.clone(), config.timeouts).expect("auth api client init failed");
    tracing::info!(
        api = %api.base_url(),
        landing = %config.landing_path,
        secure_cookie = config.cookie_secure,
        "auth api client initialized"
    );

    let port = config.port;
    let state = state::AppState::new(Arc::new(api), config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
