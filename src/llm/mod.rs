//! LLM backend abstraction.
//!
//! This module provides:
//! - The [`LlmClient`] trait consumed by pipeline nodes
//! - Chat wire types shared by implementations
//! - [`HttpLlmClient`], a reqwest-based client for OpenAI-compatible
//!   chat-completions endpoints

mod client;
mod types;

pub use client::HttpLlmClient;
pub use types::*;

use async_trait::async_trait;

use crate::error::LlmResult;

/// A backend capable of chat completion.
///
/// Implementations are shared read-only across concurrent pipeline
/// invocations, so the trait requires `Send + Sync`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run a chat completion against the backend.
    async fn complete(&self, request: ChatRequest) -> LlmResult<ChatResponse>;

    /// The backend's model identifier, if it exposes one.
    ///
    /// Optional capability: backends that do not know their model return
    /// `None`, which callers treat as a missing signal rather than an
    /// error. Must be cheap to call.
    fn model_name(&self) -> Option<String> {
        None
    }
}
