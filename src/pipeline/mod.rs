//! Pipeline contracts shared by all nodes.
//!
//! This module provides:
//! - [`GraphNode`]: the trait a pipeline node implements
//! - [`ExecutionState`]: the immutable value threaded through the graph
//! - [`QueryAnalysis`]: the upstream classification of the query
//! - [`UserProfile`] and [`OutputFormat`]: the requesting user's context
//! - [`ReasoningMethod`]: the closed set of reasoning strategies

mod analysis;
mod graph;
mod profile;
mod reasoning;
mod state;

pub use analysis::QueryAnalysis;
pub use graph::GraphNode;
pub use profile::{OutputFormat, UserProfile};
pub use reasoning::ReasoningMethod;
pub use state::{ExecutionState, QUERY_ANALYSIS_KEY};
