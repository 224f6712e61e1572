//! Pipeline node implementations.
//!
//! Each node implements [`GraphNode`](crate::pipeline::GraphNode) over
//! [`ExecutionState`](crate::pipeline::ExecutionState) and is sequenced by
//! an external graph executor.

mod reasoning_selection;

pub use reasoning_selection::*;
