use std::sync::Arc;

use axum::Router;
use axum::routing::get_service;
use sea_orm::DatabaseConnection;
use tokio::{signal, task::AbortHandle};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::config::Config;
use crate::routes;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

pub fn create_router(db: DatabaseConnection, config: Arc<Config>) -> Router {
    let public_bucket = format!("{}/public", config.upload_dir);
    let state = AppState { db, config };

    Router::new()
        .merge(auth::router::router())
        .merge(routes::public::router())
        .merge(routes::admin::router())
        .merge(routes::uploads::router())
        .with_state(state)
        .nest_service("/files", get_service(ServeDir::new(public_bucket)))
        // The React frontend runs on its own origin; the CORS layer also
        // answers OPTIONS preflights.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn shutdown_signal(sweeper_abort_handle: AbortHandle) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { sweeper_abort_handle.abort() },
        _ = terminate => { sweeper_abort_handle.abort() },
    }
}
