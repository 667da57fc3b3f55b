//! Sentiment analysis pipeline for classifying text emotional tone.
//!
//! Text is encoded against a fixed vocabulary, run through a classifier and
//! reduced to a label with per-label probabilities.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - High-level interface for sentiment classification
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentAnalysisModel`] - Trait for sentiment analysis model implementations
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment_server::pipelines::sentiment_analysis_pipeline::*;
//! use sentiment_server::pipelines::utils::DeviceSelectable;
//!
//! # fn run() -> anyhow::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::simple().cpu().build()?;
//!
//! let result = pipeline.predict("좋다 최고")?;
//! println!("Sentiment: {} (confidence: {:.4})", result.label, result.score);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::SentimentAnalysisModel;
pub use pipeline::{
    round_probability, select_label, LabelProbabilities, ModelInfo, SentimentAnalysisPipeline,
    SentimentResult,
};

pub use crate::models::SimpleTextClassifier;

pub use anyhow::Result;
