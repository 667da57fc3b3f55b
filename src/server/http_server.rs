use super::handlers::{health_handler, model_info_handler, predict_handler};
use super::state::AppState;
use crate::pipelines::sentiment_analysis_pipeline::SentimentAnalysisModel;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_app<M>(state: AppState<M>) -> Router
where
    M: SentimentAnalysisModel + Send + Sync + 'static,
{
    Router::new()
        // Health check
        .route("/", get(health_handler::<M>))
        // Classification
        .route("/predict", post(predict_handler::<M>))
        // Model metadata
        .route("/model/info", get(model_info_handler::<M>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the app on `host:port` until Ctrl-C.
pub async fn start_server<M>(state: AppState<M>, host: &str, port: u16) -> anyhow::Result<()>
where
    M: SentimentAnalysisModel + Send + Sync + 'static,
{
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;

    tracing::info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
