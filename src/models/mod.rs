pub mod text_classifier;

pub use text_classifier::{SimpleTextClassifier, MODEL_TYPE};
