use serde::{Deserialize, Serialize};

/// Upstream classification of the user's query.
///
/// Produced by the query-analysis stage and carried in state metadata under
/// [`QUERY_ANALYSIS_KEY`](super::QUERY_ANALYSIS_KEY). Every field is
/// optional; an absent record simply contributes no signal downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Coarse intent category. Open vocabulary; observed values include
    /// "comparison", "creative", "analysis" and "research".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// Classifier confidence (0.0-1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Topics extracted from the query.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
}

impl QueryAnalysis {
    /// Create an empty analysis
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the intent category
    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// Set the classifier confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    /// Set the extracted topics
    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }
}
