pub mod config;
pub mod error;
pub mod label;

pub use config::ClassifierConfig;
pub use error::{ApiError, ErrorResponse};
pub use label::{class_names, SentimentLabel};
