use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::{NodeResult, StateError};
use crate::llm::LlmClient;
use crate::pipeline::{ExecutionState, GraphNode, OutputFormat, ReasoningMethod};

/// Node name used for graph wiring and logging.
pub const REASONING_SELECTION_NODE: &str = "reasoning_selection";

/// Baseline every method starts from; keeps the arg-max defined when no
/// signal fires.
const BASELINE_SCORE: i32 = 10;
/// Upstream intent classification, the most trusted signal.
const INTENT_WEIGHT: i32 = 30;
/// Raw keyword matches in the query text.
const LEXICAL_WEIGHT: i32 = 20;
/// Explicit user preferences, including the preferred output format.
const PREFERENCE_WEIGHT: i32 = 15;
/// The profile's domain tag.
const DOMAIN_WEIGHT: i32 = 10;
/// Model-brand affinity, the weakest signal.
const MODEL_AFFINITY_WEIGHT: i32 = 10;

/// Keywords suggesting a structured comparison.
const TABLE_KEYWORDS: &[&str] = &["compare", "versus", "difference"];
/// Keywords suggesting idea generation.
const IDEAS_KEYWORDS: &[&str] = &["creative", "idea", "brainstorm"];
/// Keywords suggesting analytical step-by-step reasoning.
const THOUGHT_KEYWORDS: &[&str] = &["analyze", "explain", "why"];

/// Selects the reasoning strategy the rest of the pipeline should use.
///
/// Scores each [`ReasoningMethod`] from the state's signals (intent,
/// query keywords, user profile, model brand) and attaches the arg-max to
/// an updated copy of the state. The node never fails: any internal error
/// falls back to [`ReasoningMethod::ChainOfThought`] so the pipeline
/// always receives a state with a method attached.
pub struct ReasoningSelectionNode {
    client: Arc<dyn LlmClient>,
}

impl ReasoningSelectionNode {
    /// Create a new selection node backed by the given client
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GraphNode<ExecutionState> for ReasoningSelectionNode {
    fn name(&self) -> &str {
        REASONING_SELECTION_NODE
    }

    fn should_execute(&self, state: &ExecutionState) -> bool {
        !state.is_complete()
    }

    async fn process(&self, state: ExecutionState) -> NodeResult<ExecutionState> {
        let client = Arc::clone(&self.client);
        let fallback = state.clone();

        // Scoring is cheap CPU work; run it on the blocking pool so a panic
        // surfaces as a join error here instead of unwinding through the
        // executor's task.
        let result = tokio::task::spawn_blocking(move || {
            select_reasoning(&state, client.as_ref()).map(|method| (state, method))
        })
        .await;

        let next = match result {
            Ok(Ok((state, method))) => {
                info!(
                    session_id = %state.session_id(),
                    method = %method,
                    "Reasoning strategy selected"
                );
                state.with_reasoning(method)
            }
            Ok(Err(e)) => {
                warn!(
                    session_id = %fallback.session_id(),
                    error = %e,
                    "Scoring failed, falling back to chain-of-thought"
                );
                fallback.with_reasoning(ReasoningMethod::ChainOfThought)
            }
            Err(e) => {
                warn!(
                    session_id = %fallback.session_id(),
                    error = %e,
                    "Scoring worker failed, falling back to chain-of-thought"
                );
                fallback.with_reasoning(ReasoningMethod::ChainOfThought)
            }
        };

        Ok(next)
    }
}

/// Score every reasoning method against the state's signals and return the
/// arg-max.
///
/// Signals are additive and independent: each rule only ever raises one
/// method's score, so adding a matching signal never lowers a method's
/// standing. The only fallible step is reading the query analysis out of
/// metadata; a malformed entry aborts scoring so the caller can take its
/// fallback path.
pub fn select_reasoning(
    state: &ExecutionState,
    client: &dyn LlmClient,
) -> Result<ReasoningMethod, StateError> {
    let analysis = state.query_analysis()?;
    let query = state.query().to_lowercase();

    let mut scores = ScoreTable::new();

    // Model-brand affinity, best effort: clients without the capability
    // contribute nothing.
    if let Some(model) = client.model_name() {
        let model = model.to_lowercase();
        if model.contains("gpt") {
            scores.add(ReasoningMethod::ChainOfIdeas, MODEL_AFFINITY_WEIGHT);
        } else if model.contains("gemini") {
            scores.add(ReasoningMethod::ChainOfThought, MODEL_AFFINITY_WEIGHT);
        }
    }

    if let Some(intent) = analysis.as_ref().and_then(|a| a.intent.as_deref()) {
        match intent {
            "comparison" => scores.add(ReasoningMethod::ChainOfTable, INTENT_WEIGHT),
            "creative" => scores.add(ReasoningMethod::ChainOfIdeas, INTENT_WEIGHT),
            "analysis" | "research" => scores.add(ReasoningMethod::ChainOfThought, INTENT_WEIGHT),
            // Open vocabulary: unrecognized intents contribute nothing.
            _ => {}
        }
    }

    if contains_any(&query, TABLE_KEYWORDS) {
        scores.add(ReasoningMethod::ChainOfTable, LEXICAL_WEIGHT);
    }
    if contains_any(&query, IDEAS_KEYWORDS) {
        scores.add(ReasoningMethod::ChainOfIdeas, LEXICAL_WEIGHT);
    }
    if contains_any(&query, THOUGHT_KEYWORDS) {
        scores.add(ReasoningMethod::ChainOfThought, LEXICAL_WEIGHT);
    }

    if let Some(profile) = state.user_profile() {
        if profile.has_preference("detailed") {
            scores.add(ReasoningMethod::ChainOfThought, PREFERENCE_WEIGHT);
        }
        if profile.has_preference("visual")
            || profile.preferred_format() == Some(OutputFormat::Table)
        {
            scores.add(ReasoningMethod::ChainOfTable, PREFERENCE_WEIGHT);
        }
        match profile.domain() {
            Some("business") => scores.add(ReasoningMethod::ChainOfTable, DOMAIN_WEIGHT),
            Some("academic") => scores.add(ReasoningMethod::ChainOfThought, DOMAIN_WEIGHT),
            Some("creative") => scores.add(ReasoningMethod::ChainOfIdeas, DOMAIN_WEIGHT),
            _ => {}
        }
    }

    debug!(
        session_id = %state.session_id(),
        scores = ?scores,
        "Scored reasoning methods"
    );

    Ok(scores.winner())
}

fn contains_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}

/// Per-invocation score vector indexed by the closed method enum.
#[derive(Debug)]
struct ScoreTable {
    scores: [i32; ReasoningMethod::ALL.len()],
}

impl ScoreTable {
    fn new() -> Self {
        Self {
            scores: [BASELINE_SCORE; ReasoningMethod::ALL.len()],
        }
    }

    fn add(&mut self, method: ReasoningMethod, weight: i32) {
        self.scores[method as usize] += weight;
    }

    fn get(&self, method: ReasoningMethod) -> i32 {
        self.scores[method as usize]
    }

    /// Arg-max over all methods. Ties resolve to the method declared
    /// earliest in [`ReasoningMethod::ALL`]: the scan only replaces the
    /// leader on a strictly greater score.
    fn winner(&self) -> ReasoningMethod {
        let mut best = ReasoningMethod::ALL[0];
        for method in ReasoningMethod::ALL {
            if self.get(method) > self.get(best) {
                best = method;
            }
        }
        best
    }
}
