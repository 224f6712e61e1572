use serde::{Deserialize, Serialize};

/// Reasoning strategies the downstream pipeline can execute.
///
/// Declaration order doubles as the tie-break order for scoring: when two
/// methods accumulate equal scores, the one declared first wins, so
/// [`ReasoningMethod::ChainOfThought`] is the all-defaults choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningMethod {
    /// Sequential step-by-step reasoning.
    ChainOfThought,
    /// Parallel idea generation and recombination.
    ChainOfIdeas,
    /// Tabular decomposition for structured comparison.
    ChainOfTable,
}

impl ReasoningMethod {
    /// All methods in declaration (tie-break) order.
    pub const ALL: [ReasoningMethod; 3] = [
        ReasoningMethod::ChainOfThought,
        ReasoningMethod::ChainOfIdeas,
        ReasoningMethod::ChainOfTable,
    ];

    /// Get the method name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningMethod::ChainOfThought => "chain_of_thought",
            ReasoningMethod::ChainOfIdeas => "chain_of_ideas",
            ReasoningMethod::ChainOfTable => "chain_of_table",
        }
    }
}

impl std::fmt::Display for ReasoningMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReasoningMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chain_of_thought" => Ok(ReasoningMethod::ChainOfThought),
            "chain_of_ideas" => Ok(ReasoningMethod::ChainOfIdeas),
            "chain_of_table" => Ok(ReasoningMethod::ChainOfTable),
            _ => Err(format!("Unknown reasoning method: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasoning_method_as_str() {
        assert_eq!(ReasoningMethod::ChainOfThought.as_str(), "chain_of_thought");
        assert_eq!(ReasoningMethod::ChainOfIdeas.as_str(), "chain_of_ideas");
        assert_eq!(ReasoningMethod::ChainOfTable.as_str(), "chain_of_table");
    }

    #[test]
    fn test_reasoning_method_display() {
        assert_eq!(
            format!("{}", ReasoningMethod::ChainOfThought),
            "chain_of_thought"
        );
        assert_eq!(format!("{}", ReasoningMethod::ChainOfTable), "chain_of_table");
    }

    #[test]
    fn test_reasoning_method_from_str_valid() {
        assert_eq!(
            "chain_of_thought".parse::<ReasoningMethod>().unwrap(),
            ReasoningMethod::ChainOfThought
        );
        assert_eq!(
            "chain_of_ideas".parse::<ReasoningMethod>().unwrap(),
            ReasoningMethod::ChainOfIdeas
        );
        assert_eq!(
            "chain_of_table".parse::<ReasoningMethod>().unwrap(),
            ReasoningMethod::ChainOfTable
        );
    }

    #[test]
    fn test_reasoning_method_from_str_case_insensitive() {
        assert_eq!(
            "CHAIN_OF_THOUGHT".parse::<ReasoningMethod>().unwrap(),
            ReasoningMethod::ChainOfThought
        );
    }

    #[test]
    fn test_reasoning_method_from_str_invalid() {
        let result = "tree".parse::<ReasoningMethod>();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Unknown reasoning method: tree");
    }

    #[test]
    fn test_reasoning_method_serde_snake_case() {
        let json = serde_json::to_string(&ReasoningMethod::ChainOfIdeas).unwrap();
        assert_eq!(json, r#""chain_of_ideas""#);

        let parsed: ReasoningMethod = serde_json::from_str(r#""chain_of_table""#).unwrap();
        assert_eq!(parsed, ReasoningMethod::ChainOfTable);
    }

    #[test]
    fn test_all_is_declaration_order() {
        // The scoring tie-break depends on this ordering.
        assert_eq!(
            ReasoningMethod::ALL,
            [
                ReasoningMethod::ChainOfThought,
                ReasoningMethod::ChainOfIdeas,
                ReasoningMethod::ChainOfTable,
            ]
        );
        for (i, method) in ReasoningMethod::ALL.iter().enumerate() {
            assert_eq!(*method as usize, i);
        }
    }

    #[test]
    fn test_reasoning_method_is_copy() {
        let method = ReasoningMethod::ChainOfIdeas;
        let copied = method;
        assert_eq!(method, copied);
    }
}
