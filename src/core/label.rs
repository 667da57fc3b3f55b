#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Output category of the sentiment classifier.
///
/// Variants are declared in class-index order: the classifier's output
/// probability at position `i` belongs to `SentimentLabel::ALL[i]`.
pub enum SentimentLabel {
    #[serde(rename = "부정적")]
    Negative,
    #[serde(rename = "중성")]
    Neutral,
    #[serde(rename = "긍정적")]
    Positive,
}

impl SentimentLabel {
    /// All labels in class-index order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
    ];

    /// Returns the wire representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Negative => "부정적",
            SentimentLabel::Neutral => "중성",
            SentimentLabel::Positive => "긍정적",
        }
    }

    /// Label for a class index, if the index is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wire names of every label, in class-index order.
pub fn class_names() -> Vec<String> {
    SentimentLabel::ALL
        .iter()
        .map(|label| label.as_str().to_string())
        .collect()
}
