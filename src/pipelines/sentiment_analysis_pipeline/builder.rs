use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::core::ClassifierConfig;
use crate::models::SimpleTextClassifier;
use crate::pipelines::utils::{DeviceRequest, DeviceSelectable};
use crate::tokenization::{Encoder, Vocabulary, DEFAULT_MAX_LENGTH};

pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    options: M::Options,
    vocabulary: Vocabulary,
    max_length: usize,
    device_request: DeviceRequest,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub fn new(options: M::Options, vocabulary: Vocabulary) -> Self {
        Self {
            options,
            vocabulary,
            max_length: DEFAULT_MAX_LENGTH,
            device_request: DeviceRequest::Default,
        }
    }

    /// Sets the length every input is padded or truncated to.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn build(self) -> anyhow::Result<SentimentAnalysisPipeline<M>> {
        let device = self.device_request.resolve()?;
        tracing::info!(
            options = ?self.options,
            vocab_size = self.vocabulary.len(),
            max_length = self.max_length,
            "building sentiment analysis pipeline"
        );
        let encoder = Encoder::new(&self.vocabulary, self.max_length)?;
        let model = M::new(self.options, device)?;
        Ok(SentimentAnalysisPipeline {
            model,
            encoder,
            vocabulary: self.vocabulary,
        })
    }
}

impl<M: SentimentAnalysisModel> DeviceSelectable for SentimentAnalysisPipelineBuilder<M> {
    fn device_request_mut(&mut self) -> &mut DeviceRequest {
        &mut self.device_request
    }
}

impl SentimentAnalysisPipelineBuilder<SimpleTextClassifier> {
    /// Builder for the embedding + LSTM classifier over the built-in vocabulary.
    pub fn simple() -> Self {
        Self::with_vocabulary(Vocabulary::default())
    }

    /// Builder for the embedding + LSTM classifier sized to `vocabulary`.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        let options = ClassifierConfig::new(vocabulary.len());
        Self::new(options, vocabulary)
    }
}
