//! Randomly initialized embedding + LSTM text classifier.
//!
//! The network is:
//! - an embedding table of `vocab_size x embed_dim`
//! - a single-layer unidirectional LSTM of width `hidden_dim`
//! - a linear head from the final hidden state to `num_classes` logits
//! - a softmax over the logits
//!
//! Weights are created in memory by the default Candle initializers every time
//! a model is built. Nothing is loaded from or saved to disk.

use crate::core::ClassifierConfig;
use anyhow::Result as AnyhowResult;
use candle_core::{DType, Device, Module, Result, Tensor, D};
use candle_nn::rnn::{lstm, LSTMConfig, LSTM, RNN};
use candle_nn::{embedding, linear, ops::softmax, Embedding, Linear, VarBuilder, VarMap};

pub const MODEL_TYPE: &str = "SimpleTextClassifier";

#[derive(Clone)]
pub struct SimpleTextClassifier {
    embedding: Embedding,
    lstm: LSTM,
    classifier: Linear,
    varmap: VarMap,
    config: ClassifierConfig,
    device: Device,
    span: tracing::Span,
}

impl SimpleTextClassifier {
    pub fn new(config: ClassifierConfig, device: Device) -> AnyhowResult<Self> {
        anyhow::ensure!(config.vocab_size > 0, "vocab_size must be non-zero");
        anyhow::ensure!(config.num_classes > 0, "num_classes must be non-zero");

        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

        let embedding = embedding(config.vocab_size, config.embed_dim, vb.pp("embedding"))?;
        let lstm = lstm(
            config.embed_dim,
            config.hidden_dim,
            LSTMConfig::default(),
            vb.pp("lstm"),
        )?;
        let classifier = linear(config.hidden_dim, config.num_classes, vb.pp("classifier"))?;

        let span = tracing::span!(tracing::Level::TRACE, "text-classifier");
        tracing::debug!(
            vocab_size = config.vocab_size,
            embed_dim = config.embed_dim,
            hidden_dim = config.hidden_dim,
            num_classes = config.num_classes,
            "initialized classifier weights"
        );

        Ok(Self {
            embedding,
            lstm,
            classifier,
            varmap,
            config,
            device,
            span,
        })
    }

    /// Runs the network over a `(batch, seq_len)` tensor of `u32` indices and
    /// returns `(batch, num_classes)` probabilities.
    pub fn forward(&self, input_ids: &Tensor) -> Result<Tensor> {
        let _enter = self.span.enter();

        // B x L x E
        let embedded = self.embedding.forward(input_ids)?;

        let states = self.lstm.seq(&embedded)?;
        let last = states
            .last()
            .ok_or_else(|| candle_core::Error::Msg("cannot classify an empty sequence".into()))?;

        // B x C
        let logits = self.classifier.forward(last.h())?;
        softmax(&logits, D::Minus1)
    }

    /// Class probabilities for a single encoded sequence.
    pub fn classify(&self, input_ids: &[u32]) -> AnyhowResult<Vec<f32>> {
        anyhow::ensure!(!input_ids.is_empty(), "cannot classify an empty sequence");
        if let Some(&bad) = input_ids
            .iter()
            .find(|&&id| id as usize >= self.config.vocab_size)
        {
            anyhow::bail!(
                "token index {bad} out of range for vocabulary of size {}",
                self.config.vocab_size
            );
        }

        // 1 x L
        let input = Tensor::new(input_ids, &self.device)?.unsqueeze(0)?;
        let probs = self.forward(&input)?.squeeze(0)?.to_vec1::<f32>()?;
        Ok(probs)
    }

    /// Total number of scalar parameters across all layers.
    pub fn num_parameters(&self) -> usize {
        self.varmap
            .all_vars()
            .iter()
            .map(|var| var.elem_count())
            .sum()
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl crate::pipelines::sentiment_analysis_pipeline::model::SentimentAnalysisModel
    for SimpleTextClassifier
{
    type Options = ClassifierConfig;

    fn new(options: Self::Options, device: Device) -> AnyhowResult<Self> {
        SimpleTextClassifier::new(options, device)
    }

    fn classify(&self, input_ids: &[u32]) -> AnyhowResult<Vec<f32>> {
        self.classify(input_ids)
    }

    fn model_type(&self) -> &str {
        MODEL_TYPE
    }

    fn num_parameters(&self) -> usize {
        self.num_parameters()
    }

    fn device(&self) -> &Device {
        self.device()
    }
}
