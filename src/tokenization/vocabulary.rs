use std::collections::HashMap;

/// Token used for every word missing from the vocabulary.
pub const UNK_TOKEN: &str = "<UNK>";

/// Words known to the built-in vocabulary, in index order.
pub const COMMON_WORDS: [&str; 22] = [
    "좋다",
    "나쁘다",
    "보통",
    "최고",
    "최악",
    "괜찮다",
    "별로",
    "훌륭하다",
    "멋지다",
    "끔찍하다",
    "안녕",
    "hello",
    "world",
    "python",
    "fastapi",
    "딥러닝",
    "머신러닝",
    "인공지능",
    "데이터",
    "분석",
    "예측",
    "모델",
];

/// Fixed token to index table.
///
/// Words get zero-based indices in the order they were supplied; the unknown
/// sentinel takes the index right after the last word. Duplicated words keep
/// their first index. Immutable once built.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    token_to_id: HashMap<String, u32>,
    tokens: Vec<String>,
    unk_id: u32,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut token_to_id = HashMap::new();
        let mut tokens = Vec::new();
        for word in words {
            let word = word.into();
            if word == UNK_TOKEN || token_to_id.contains_key(&word) {
                continue;
            }
            token_to_id.insert(word.clone(), tokens.len() as u32);
            tokens.push(word);
        }

        let unk_id = tokens.len() as u32;
        token_to_id.insert(UNK_TOKEN.to_string(), unk_id);
        tokens.push(UNK_TOKEN.to_string());

        Self {
            token_to_id,
            tokens,
            unk_id,
        }
    }

    /// Index of `token`, or the unknown index if the token is not known.
    pub fn lookup(&self, token: &str) -> u32 {
        self.token_to_id.get(token).copied().unwrap_or(self.unk_id)
    }

    pub fn unk_id(&self) -> u32 {
        self.unk_id
    }

    /// Number of entries including the unknown sentinel.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates `(token, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(id, token)| (token.as_str(), id as u32))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(COMMON_WORDS)
    }
}
