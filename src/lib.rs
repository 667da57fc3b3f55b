pub mod core;
pub mod models;
pub mod pipelines;
pub mod server;
pub mod tokenization;

// Re-export core types
pub use core::{ApiError, ClassifierConfig, SentimentLabel};

// Re-export model types for easier access
pub use models::SimpleTextClassifier;
