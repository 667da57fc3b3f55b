use candle_core::Device;

/// A network that maps an encoded index sequence to class probabilities.
///
/// `classify` must return one probability per [`SentimentLabel`], in
/// class-index order, non-negative and summing to 1.
///
/// [`SentimentLabel`]: crate::core::SentimentLabel
pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: Device) -> anyhow::Result<Self>
    where
        Self: Sized;

    fn classify(&self, input_ids: &[u32]) -> anyhow::Result<Vec<f32>>;

    /// Short architecture name reported by the model info endpoint.
    fn model_type(&self) -> &str;

    fn num_parameters(&self) -> usize;

    fn device(&self) -> &Device;
}
