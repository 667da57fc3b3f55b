use super::vocabulary::{Vocabulary, UNK_TOKEN};
use anyhow::{Context, Result};
use std::str::FromStr;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

/// Default length of an encoded sequence.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Index used to fill short sequences.
///
/// This is also the index of the first vocabulary word, so padding cannot be
/// told apart from that word once encoded.
pub const PAD_ID: u32 = 0;

/// Turns free text into a fixed-length sequence of vocabulary indices.
///
/// Text is split on whitespace only, each piece is mapped through the
/// vocabulary (unknown words map to the unknown index), and the result is
/// right-padded with [`PAD_ID`] or right-truncated to `max_length`.
#[derive(Clone)]
pub struct Encoder {
    tokenizer: Tokenizer,
    max_length: usize,
}

impl Encoder {
    pub fn new(vocab: &Vocabulary, max_length: usize) -> Result<Self> {
        anyhow::ensure!(max_length > 0, "max_length must be at least 1");

        let vocab_map: serde_json::Map<String, serde_json::Value> = vocab
            .iter()
            .map(|(token, id)| (token.to_string(), serde_json::Value::from(id)))
            .collect();
        let spec = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [],
            "normalizer": null,
            "pre_tokenizer": { "type": "WhitespaceSplit" },
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": vocab_map,
                "unk_token": UNK_TOKEN,
            },
        });

        let mut tokenizer = Tokenizer::from_str(&spec.to_string())
            .map_err(anyhow::Error::msg)
            .context("failed to build word-level tokenizer")?;

        let pad_token = vocab
            .iter()
            .find(|(_, id)| *id == PAD_ID)
            .map(|(token, _)| token.to_string())
            .unwrap_or_else(|| UNK_TOKEN.to_string());
        tokenizer.with_padding(Some(PaddingParams {
            strategy: PaddingStrategy::Fixed(max_length),
            pad_id: PAD_ID,
            pad_token,
            ..Default::default()
        }));
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length,
                ..Default::default()
            }))
            .map_err(anyhow::Error::msg)
            .context("failed to configure truncation")?;

        Ok(Self {
            tokenizer,
            max_length,
        })
    }

    /// Encoder over the built-in vocabulary with the default length.
    pub fn with_default_vocabulary() -> Result<Self> {
        Self::new(&Vocabulary::default(), DEFAULT_MAX_LENGTH)
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| anyhow::anyhow!("Tokenization error: {e}"))?;
        let ids = encoding.get_ids();
        anyhow::ensure!(
            ids.len() == self.max_length,
            "encoded {} ids, expected {}",
            ids.len(),
            self.max_length
        );
        Ok(ids.to_vec())
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}
