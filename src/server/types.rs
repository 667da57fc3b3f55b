use crate::core::SentimentLabel;
use crate::pipelines::sentiment_analysis_pipeline::{LabelProbabilities, SentimentResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

impl HealthResponse {
    pub fn running(model_loaded: bool) -> Self {
        Self {
            status: "running".to_string(),
            model_loaded,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub prediction: SentimentLabel,
    pub confidence: f64,
    pub probabilities: LabelProbabilities,
}

impl From<SentimentResult> for PredictionResponse {
    fn from(result: SentimentResult) -> Self {
        Self {
            prediction: result.label,
            confidence: result.score,
            probabilities: result.probabilities,
        }
    }
}
