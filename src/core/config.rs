use serde::Deserialize;

/// Shape of the embedding + LSTM classifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifierConfig {
    pub vocab_size: usize,
    #[serde(default = "default_embed_dim")]
    pub embed_dim: usize,
    #[serde(default = "default_hidden_dim")]
    pub hidden_dim: usize,
    #[serde(default = "default_num_classes")]
    pub num_classes: usize,
}

fn default_embed_dim() -> usize {
    128
}

fn default_hidden_dim() -> usize {
    64
}

fn default_num_classes() -> usize {
    crate::core::SentimentLabel::ALL.len()
}

impl ClassifierConfig {
    /// Default layer sizes for a vocabulary of `vocab_size` entries.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            embed_dim: default_embed_dim(),
            hidden_dim: default_hidden_dim(),
            num_classes: default_num_classes(),
        }
    }

    /// Number of scalar parameters a classifier of this shape holds.
    ///
    /// Embedding table, LSTM input/hidden weights with both bias vectors, and
    /// the output projection with bias.
    pub fn parameter_count(&self) -> usize {
        let gates = 4 * self.hidden_dim;
        let embedding = self.vocab_size * self.embed_dim;
        let lstm = gates * self.embed_dim + gates * self.hidden_dim + 2 * gates;
        let head = self.hidden_dim * self.num_classes + self.num_classes;
        embedding + lstm + head
    }
}
