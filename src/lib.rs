//! # Reasoning Select
//!
//! The reasoning-strategy decision node of an LLM-backed research agent
//! pipeline. Given the current execution state (query, upstream query
//! analysis, user profile) and the target LLM backend, the node scores a
//! small closed set of reasoning strategies and attaches the winner to an
//! updated copy of the state.
//!
//! ## Features
//!
//! - **Additive scoring**: independent intent, lexical, profile and
//!   model-affinity signals accumulate per strategy; the arg-max wins
//! - **Fail-safe selection**: any internal failure yields the
//!   chain-of-thought default instead of an error
//! - **Pipeline contracts**: the [`GraphNode`] trait, immutable
//!   [`ExecutionState`], and the profile/analysis records consumed by
//!   downstream stages
//! - **Backend abstraction**: an [`LlmClient`] trait with an optional
//!   model-identifier capability, plus an HTTP implementation
//!
//! ## Architecture
//!
//! ```text
//! Graph Executor → ReasoningSelectionNode → ExecutionState + ReasoningMethod
//!                         ↓ (probe)
//!                     LlmClient
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use reasoning_select::{Config, ExecutionState, GraphNode, ReasoningSelectionNode};
//! use reasoning_select::llm::HttpLlmClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(HttpLlmClient::new(&config.llm, config.request.clone())?);
//!     let node = ReasoningSelectionNode::new(client);
//!     let state = ExecutionState::new("compare rust and go for services");
//!     let updated = node.process(state).await?;
//!     println!("{:?}", updated.reasoning_method());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Configuration management loaded from the environment.
pub mod config;
/// Error types and result aliases for the crate.
pub mod error;
/// LLM client abstraction and HTTP implementation.
pub mod llm;
/// Pipeline node implementations.
pub mod nodes;
/// Pipeline contracts: graph node trait, execution state, data records.
pub mod pipeline;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use llm::LlmClient;
pub use nodes::ReasoningSelectionNode;
pub use pipeline::{ExecutionState, GraphNode, ReasoningMethod};
