use super::state::AppState;
use super::types::{HealthResponse, PredictionResponse, TextRequest};
use crate::core::ApiError;
use crate::pipelines::sentiment_analysis_pipeline::{ModelInfo, SentimentAnalysisModel};
use axum::extract::State;
use axum::Json;

pub async fn health_handler<M>(State(state): State<AppState<M>>) -> Json<HealthResponse>
where
    M: SentimentAnalysisModel + Send + Sync + 'static,
{
    Json(HealthResponse::running(state.is_loaded()))
}

pub async fn predict_handler<M>(
    State(state): State<AppState<M>>,
    Json(request): Json<TextRequest>,
) -> Result<Json<PredictionResponse>, ApiError>
where
    M: SentimentAnalysisModel + Send + Sync + 'static,
{
    let pipeline = state.pipeline().ok_or(ApiError::Unavailable)?;

    let result = pipeline.predict(&request.text).map_err(|e| {
        tracing::error!("prediction failed for {} bytes of input: {e:#}", request.text.len());
        ApiError::internal(e)
    })?;

    Ok(Json(result.into()))
}

pub async fn model_info_handler<M>(
    State(state): State<AppState<M>>,
) -> Result<Json<ModelInfo>, ApiError>
where
    M: SentimentAnalysisModel + Send + Sync + 'static,
{
    let pipeline = state.pipeline().ok_or(ApiError::Unavailable)?;
    Ok(Json(pipeline.info()))
}
