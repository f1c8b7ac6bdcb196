//! Binary entrypoint for the engagement metrics API.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing_subscriber::{fmt, EnvFilter};

use metrics_api::{sample_users, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "5000".into())
    .parse()
    .expect("PORT must be a valid u16");
  let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

  let state = Arc::new(AppState {
    dataset: sample_users(),
  });

  let app = Router::new()
    .route("/health", get(metrics_api::health))
    .route("/api/metrics", get(metrics_api::metrics))
    .fallback_service(ServeDir::new(&static_dir))
    .layer(CorsLayer::permissive())
    .with_state(state);

  let addr = SocketAddr::from(([0, 0, 0, 0], port));
  tracing::info!(%addr, "metrics-api listening");

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
