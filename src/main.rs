use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tapt_portal::auth::user::delete_expired_tokens;
use tapt_portal::config::Config;
use tapt_portal::database::setup_database;
use tapt_portal::router::{create_router, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = setup_database(&config.database_url).await?;

    // Reclaim expired bearer tokens in the background.
    let sweeper = tokio::task::spawn({
        let db = db.clone();
        async move {
            let mut interval = tokio::time::interval(tokio::time::Duration::from_secs(60));
            loop {
                interval.tick().await;
                match delete_expired_tokens(&db).await {
                    Ok(0) => {}
                    Ok(n) => tracing::debug!("swept {n} expired tokens"),
                    Err(e) => tracing::error!("token sweep failed: {e}"),
                }
            }
        }
    });

    let config = Arc::new(config);
    let app = create_router(db, config.clone());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweeper.abort_handle()))
        .await?;

    let _ = sweeper.await;

    Ok(())
}
