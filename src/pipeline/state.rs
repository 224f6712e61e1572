use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::analysis::QueryAnalysis;
use super::profile::UserProfile;
use super::reasoning::ReasoningMethod;
use crate::error::StateError;

/// Metadata key the query-analysis stage writes its record under.
pub const QUERY_ANALYSIS_KEY: &str = "query_analysis";

/// The value threaded through the pipeline's nodes.
///
/// States are immutable: every transition is a `with_*` method that
/// consumes the old value and returns a new one with the remaining fields
/// carried over unchanged. Nodes therefore never observe another node's
/// in-place mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionState {
    session_id: String,
    query: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    metadata: HashMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_profile: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_method: Option<ReasoningMethod>,
    complete: bool,
    created_at: DateTime<Utc>,
}

impl ExecutionState {
    /// Create a fresh state for a query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            query: query.into(),
            metadata: HashMap::new(),
            user_profile: None,
            reasoning_method: None,
            complete: false,
            created_at: Utc::now(),
        }
    }

    /// Copy with a metadata entry added or replaced
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Copy with the query analysis stored under its well-known key
    pub fn with_query_analysis(self, analysis: &QueryAnalysis) -> Self {
        let value = serde_json::to_value(analysis).unwrap_or_default();
        self.with_metadata(QUERY_ANALYSIS_KEY, value)
    }

    /// Copy with the user profile attached
    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.user_profile = Some(profile);
        self
    }

    /// Copy with the selected reasoning method attached
    pub fn with_reasoning(mut self, method: ReasoningMethod) -> Self {
        self.reasoning_method = Some(method);
        self
    }

    /// Copy with the completion flag raised
    pub fn mark_complete(mut self) -> Self {
        self.complete = true;
        self
    }

    /// Session identifier for logging and correlation
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The raw user query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The metadata mapping
    pub fn metadata(&self) -> &HashMap<String, serde_json::Value> {
        &self.metadata
    }

    /// The user profile, if one was attached
    pub fn user_profile(&self) -> Option<&UserProfile> {
        self.user_profile.as_ref()
    }

    /// The selected reasoning method, if a selection node has run
    pub fn reasoning_method(&self) -> Option<ReasoningMethod> {
        self.reasoning_method
    }

    /// Whether the pipeline has finished with this state
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// When the state was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Read the query analysis out of metadata.
    ///
    /// An absent key is a missing signal (`Ok(None)`); a present entry that
    /// does not deserialize as [`QueryAnalysis`] is an error so callers can
    /// take their fallback path.
    pub fn query_analysis(&self) -> Result<Option<QueryAnalysis>, StateError> {
        match self.metadata.get(QUERY_ANALYSIS_KEY) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
                StateError::Metadata {
                    key: QUERY_ANALYSIS_KEY.to_string(),
                    message: e.to_string(),
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_state_defaults() {
        let state = ExecutionState::new("what is rust");
        assert_eq!(state.query(), "what is rust");
        assert!(state.metadata().is_empty());
        assert!(state.user_profile().is_none());
        assert!(state.reasoning_method().is_none());
        assert!(!state.is_complete());
        assert!(!state.session_id().is_empty());
    }

    #[test]
    fn test_fresh_states_get_distinct_sessions() {
        let a = ExecutionState::new("q");
        let b = ExecutionState::new("q");
        assert_ne!(a.session_id(), b.session_id());
    }

    #[test]
    fn test_with_reasoning_carries_other_fields() {
        let state = ExecutionState::new("compare x and y")
            .with_metadata("step", serde_json::json!(1))
            .with_profile(UserProfile::new("u-1"));
        let session_id = state.session_id().to_string();
        let created_at = state.created_at();

        let updated = state.with_reasoning(ReasoningMethod::ChainOfTable);

        assert_eq!(updated.reasoning_method(), Some(ReasoningMethod::ChainOfTable));
        assert_eq!(updated.session_id(), session_id);
        assert_eq!(updated.query(), "compare x and y");
        assert_eq!(updated.metadata().get("step"), Some(&serde_json::json!(1)));
        assert_eq!(updated.user_profile().unwrap().user_id(), "u-1");
        assert_eq!(updated.created_at(), created_at);
        assert!(!updated.is_complete());
    }

    #[test]
    fn test_clone_is_unaffected_by_transitions() {
        let original = ExecutionState::new("q");
        let snapshot = original.clone();

        let _updated = original.with_reasoning(ReasoningMethod::ChainOfIdeas);

        assert!(snapshot.reasoning_method().is_none());
    }

    #[test]
    fn test_mark_complete() {
        let state = ExecutionState::new("q").mark_complete();
        assert!(state.is_complete());
    }

    #[test]
    fn test_query_analysis_absent() {
        let state = ExecutionState::new("q");
        assert_eq!(state.query_analysis().unwrap(), None);
    }

    #[test]
    fn test_query_analysis_round_trip() {
        let analysis = QueryAnalysis::new().with_intent("comparison");
        let state = ExecutionState::new("q").with_query_analysis(&analysis);

        let read = state.query_analysis().unwrap().unwrap();
        assert_eq!(read.intent.as_deref(), Some("comparison"));
    }

    #[test]
    fn test_query_analysis_malformed_is_error() {
        let state =
            ExecutionState::new("q").with_metadata(QUERY_ANALYSIS_KEY, serde_json::json!(42));

        let err = state.query_analysis().unwrap_err();
        assert!(err.to_string().contains(QUERY_ANALYSIS_KEY));
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = ExecutionState::new("compare x and y")
            .with_profile(UserProfile::new("u-1"))
            .with_reasoning(ReasoningMethod::ChainOfThought);

        let json = serde_json::to_string(&state).unwrap();
        let parsed: ExecutionState = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.session_id(), state.session_id());
        assert_eq!(parsed.query(), state.query());
        assert_eq!(parsed.reasoning_method(), state.reasoning_method());
    }
}
