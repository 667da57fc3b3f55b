//! Text to index-sequence conversion.
//!
//! - [`Vocabulary`] - fixed token to index table with an unknown sentinel
//! - [`Encoder`] - whitespace tokenization with fixed-length padding/truncation

pub mod encoder;
pub mod vocabulary;

pub use encoder::{Encoder, DEFAULT_MAX_LENGTH, PAD_ID};
pub use vocabulary::{Vocabulary, COMMON_WORDS, UNK_TOKEN};
