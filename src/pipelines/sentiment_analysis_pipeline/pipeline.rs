use super::model::SentimentAnalysisModel;
use crate::core::{class_names, SentimentLabel};
use crate::tokenization::{Encoder, Vocabulary};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of decimals kept in reported probabilities.
const PROBABILITY_DECIMALS: i32 = 4;

/// Rounds a probability to [`PROBABILITY_DECIMALS`] decimals.
pub fn round_probability(p: f32) -> f64 {
    let scale = 10f64.powi(PROBABILITY_DECIMALS);
    (p as f64 * scale).round() / scale
}

/// Picks the most probable label.
///
/// Ties go to the label that comes first in class-index order.
pub fn select_label(probabilities: &[f32]) -> anyhow::Result<(SentimentLabel, f32)> {
    anyhow::ensure!(
        probabilities.len() == SentimentLabel::ALL.len(),
        "expected {} class probabilities, got {}",
        SentimentLabel::ALL.len(),
        probabilities.len()
    );

    let mut best = 0;
    for (i, p) in probabilities.iter().enumerate().skip(1) {
        if *p > probabilities[best] {
            best = i;
        }
    }

    let label = SentimentLabel::from_index(best)
        .ok_or_else(|| anyhow::anyhow!("no label for class index {best}"))?;
    Ok((label, probabilities[best]))
}

/// Per-label probabilities, kept in class-index order.
///
/// Serializes as a JSON object keyed by the label wire names.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelProbabilities(Vec<(SentimentLabel, f64)>);

impl LabelProbabilities {
    pub fn get(&self, label: SentimentLabel) -> Option<f64> {
        self.0.iter().find(|(l, _)| *l == label).map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SentimentLabel, f64)> {
        self.0.iter()
    }

    pub fn max(&self) -> Option<f64> {
        self.0.iter().map(|(_, p)| *p).reduce(f64::max)
    }
}

impl Serialize for LabelProbabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, p) in &self.0 {
            map.serialize_entry(label.as_str(), p)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Probability of `label`, rounded.
    pub score: f64,
    pub probabilities: LabelProbabilities,
}

/// Static description of a loaded pipeline.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub vocab_size: usize,
    pub parameters: usize,
    pub classes: Vec<String>,
}

pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
    pub(crate) encoder: Encoder,
    pub(crate) vocabulary: Vocabulary,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Predict sentiment with structured result containing label, confidence
    /// and the probability of every label.
    pub fn predict(&self, text: &str) -> anyhow::Result<SentimentResult> {
        let input_ids = self.encoder.encode(text)?;
        let probabilities = self.model.classify(&input_ids)?;
        let (label, score) = select_label(&probabilities)?;

        let probabilities = SentimentLabel::ALL
            .iter()
            .zip(&probabilities)
            .map(|(label, p)| (*label, round_probability(*p)))
            .collect();

        tracing::debug!(%label, score, "classified text");

        Ok(SentimentResult {
            label,
            score: round_probability(score),
            probabilities: LabelProbabilities(probabilities),
        })
    }

    /// Encodes `text` exactly as `predict` would.
    pub fn encode(&self, text: &str) -> anyhow::Result<Vec<u32>> {
        self.encoder.encode(text)
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            model_type: self.model.model_type().to_string(),
            vocab_size: self.vocabulary.len(),
            parameters: self.model.num_parameters(),
            classes: class_names(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}
