use std::sync::Arc;

use anyhow::Result;
use clans::{
    config::Config,
    infrastructure::database,
    routes::create_routes,
    state::AppState,
    telemetry,
};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;
    let config = Arc::new(config);

    telemetry::init(config.debug);

    let db_pool = database::create_pool(&config.database).await?;
    database::ensure_schema(&db_pool).await?;

    let state = AppState::new(config.clone(), db_pool);

    let app = create_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("{} running on {addr}", config.app_name);

    axum::serve(listener, app).await?;

    Ok(())
}
