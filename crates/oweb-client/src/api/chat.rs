//! Chat completions API.

use crate::client::OwebClient;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::types::{ChatCompletion, ChatCompletionRequest};

/// Chat API client.
pub struct ChatApi {
    client: OwebClient,
}

impl ChatApi {
    pub(crate) fn new(client: OwebClient) -> Self {
        Self { client }
    }

    /// Send a completion request.
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<Outcome<ChatCompletion>> {
        tracing::debug!(
            model = %request.model,
            knowledge = request.knowledge_ids.as_ref().map_or(0, Vec::len),
            "requesting completion"
        );
        self.client.post("chat/completions", request).await
    }

    /// Ask a one-shot question, optionally grounded in knowledge documents.
    pub async fn ask(
        &self,
        model: &str,
        question: &str,
        knowledge_ids: Option<Vec<String>>,
    ) -> Result<Outcome<ChatCompletion>> {
        let mut request = ChatCompletionRequest::new(model, question);
        if let Some(ids) = knowledge_ids {
            request = request.with_knowledge(ids);
        }
        self.complete(&request).await
    }
}
