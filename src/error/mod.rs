use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading or validation failed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the failure.
        message: String,
    },

    /// Error from the LLM backend.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Error reading the execution state.
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Error from a pipeline node.
    #[error("Node error: {0}")]
    Node(#[from] NodeError),
}

/// LLM backend errors
#[derive(Debug, Error)]
pub enum LlmError {
    /// Backend gave up after exhausting retries.
    #[error("LLM backend unavailable: {message} (retries: {retries})")]
    Unavailable {
        /// Last error observed before giving up.
        message: String,
        /// Number of retries attempted.
        retries: u32,
    },

    /// Backend returned a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or error message.
        message: String,
    },

    /// Backend response could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of the decoding failure.
        message: String,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Execution state errors
#[derive(Debug, Error)]
pub enum StateError {
    /// A metadata entry exists but does not have the expected shape.
    #[error("Malformed metadata under '{key}': {message}")]
    Metadata {
        /// The metadata key that was read.
        key: String,
        /// Description of the shape mismatch.
        message: String,
    },
}

/// Pipeline node errors
#[derive(Debug, Error)]
pub enum NodeError {
    /// A worker task spawned by a node did not complete.
    #[error("Node '{node}' worker failed: {message}")]
    Join {
        /// Name of the node that spawned the task.
        node: String,
        /// Join failure description.
        message: String,
    },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for LLM backend operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Result type alias for pipeline node operations
pub type NodeResult<T> = Result<T, NodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "missing key".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: missing key");
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Unavailable {
            message: "server down".to_string(),
            retries: 3,
        };
        assert_eq!(
            err.to_string(),
            "LLM backend unavailable: server down (retries: 3)"
        );

        let err = LlmError::Api {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 401 - unauthorized");

        let err = LlmError::InvalidResponse {
            message: "malformed JSON".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");

        let err = LlmError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
    }

    #[test]
    fn test_state_error_display() {
        let err = StateError::Metadata {
            key: "query_analysis".to_string(),
            message: "expected object".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed metadata under 'query_analysis': expected object"
        );
    }

    #[test]
    fn test_node_error_display() {
        let err = NodeError::Join {
            node: "reasoning_selection".to_string(),
            message: "task cancelled".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Node 'reasoning_selection' worker failed: task cancelled"
        );
    }

    #[test]
    fn test_llm_error_conversion_to_app_error() {
        let llm_err = LlmError::Timeout { timeout_ms: 1000 };
        let app_err: AppError = llm_err.into();
        assert!(matches!(app_err, AppError::Llm(_)));
    }

    #[test]
    fn test_state_error_conversion_to_app_error() {
        let state_err = StateError::Metadata {
            key: "query_analysis".to_string(),
            message: "expected object".to_string(),
        };
        let app_err: AppError = state_err.into();
        assert!(matches!(app_err, AppError::State(_)));
        assert!(app_err.to_string().contains("query_analysis"));
    }

    #[test]
    fn test_node_error_conversion_to_app_error() {
        let node_err = NodeError::Join {
            node: "reasoning_selection".to_string(),
            message: "panicked".to_string(),
        };
        let app_err: AppError = node_err.into();
        assert!(matches!(app_err, AppError::Node(_)));
    }
}
