use crate::models::SimpleTextClassifier;
use crate::pipelines::sentiment_analysis_pipeline::{
    SentimentAnalysisModel, SentimentAnalysisPipeline,
};
use std::sync::{Arc, OnceLock};

/// Outcome of the one-time startup initialization.
pub enum ModelState<M: SentimentAnalysisModel> {
    Loaded(Arc<SentimentAnalysisPipeline<M>>),
    Failed(String),
}

/// Shared application state handed to every request handler.
///
/// Holds the classifier pipeline behind a write-once cell: it starts out
/// uninitialized, is set exactly once at startup (to loaded or failed), and is
/// only read afterwards.
pub struct AppState<M: SentimentAnalysisModel = SimpleTextClassifier> {
    model: Arc<OnceLock<ModelState<M>>>,
}

impl<M: SentimentAnalysisModel> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

impl<M: SentimentAnalysisModel> Default for AppState<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SentimentAnalysisModel> AppState<M> {
    /// State with no model yet.
    pub fn new() -> Self {
        Self {
            model: Arc::new(OnceLock::new()),
        }
    }

    /// State that already holds `pipeline`.
    pub fn with_pipeline(pipeline: SentimentAnalysisPipeline<M>) -> Self {
        let state = Self::new();
        state.initialize(|| Ok(pipeline));
        state
    }

    /// Runs `loader` if no initialization has happened yet.
    ///
    /// A loader error is logged and leaves the state permanently failed.
    /// Returns `false` if an earlier call already initialized the state, in
    /// which case `loader` is not run.
    pub fn initialize<F>(&self, loader: F) -> bool
    where
        F: FnOnce() -> anyhow::Result<SentimentAnalysisPipeline<M>>,
    {
        let mut ran = false;
        self.model.get_or_init(|| {
            ran = true;
            tracing::info!("loading model");
            match loader() {
                Ok(pipeline) => {
                    tracing::info!("model loaded");
                    ModelState::Loaded(Arc::new(pipeline))
                }
                Err(e) => {
                    tracing::error!("model load failed: {e:#}");
                    ModelState::Failed(format!("{e:#}"))
                }
            }
        });
        if !ran {
            tracing::warn!("model already initialized, ignoring reload");
        }
        ran
    }

    pub fn pipeline(&self) -> Option<&Arc<SentimentAnalysisPipeline<M>>> {
        match self.model.get()? {
            ModelState::Loaded(pipeline) => Some(pipeline),
            ModelState::Failed(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.pipeline().is_some()
    }

    /// Reason of a failed initialization, if it failed.
    pub fn failure(&self) -> Option<&str> {
        match self.model.get()? {
            ModelState::Failed(reason) => Some(reason),
            ModelState::Loaded(_) => None,
        }
    }
}
