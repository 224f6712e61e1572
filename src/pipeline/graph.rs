use async_trait::async_trait;

use crate::error::NodeResult;

/// One node in the agent's execution graph.
///
/// The external graph executor sequences nodes; this crate only defines the
/// contract a node must satisfy. The executor is expected to call
/// [`should_execute`](GraphNode::should_execute) first and skip the node
/// when it returns false. `process` consumes the state and returns an
/// updated copy, never a mutation of a shared value, so invocations are
/// independent and safe to run concurrently on a shared worker pool.
#[async_trait]
pub trait GraphNode<S>: Send + Sync
where
    S: Send + 'static,
{
    /// Stable node name used for graph wiring and logging.
    fn name(&self) -> &str;

    /// Whether the node should run for this state.
    fn should_execute(&self, state: &S) -> bool;

    /// Process the state, returning the updated copy.
    async fn process(&self, state: S) -> NodeResult<S>;
}
