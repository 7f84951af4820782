//! Request and response types for the Open WebUI API.
//!
//! Response types are lenient: unknown fields are ignored and missing
//! collections deserialize as empty, since the server adds fields freely.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a document has no collection.
pub const NO_COLLECTION: &str = "N/A";

// ─────────────────────────────────────────────────────────────────────────────
// Files
// ─────────────────────────────────────────────────────────────────────────────

/// An uploaded knowledge document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeFile {
    /// File ID.
    #[serde(default)]
    pub id: String,
    /// Original file name.
    #[serde(default)]
    pub filename: String,
    /// Indexing metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FileMeta>,
}

/// Metadata attached to a knowledge document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileMeta {
    /// Collection the document was indexed into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

impl KnowledgeFile {
    /// Collection name, or [`NO_COLLECTION`] when the metadata lacks one.
    pub fn collection_name(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|meta| meta.collection_name.as_deref())
            .unwrap_or(NO_COLLECTION)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Models
// ─────────────────────────────────────────────────────────────────────────────

/// Response for list models.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelList {
    /// Available models.
    #[serde(default)]
    pub data: Vec<Model>,
}

/// A model descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Model {
    /// Model ID, as accepted by chat completions.
    #[serde(default)]
    pub id: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Model {
    /// Display name, falling back to the ID.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the sender (`user`, `assistant`, `system`).
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A message from the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `/chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model ID.
    pub model: String,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Knowledge documents to ground the answer in. `None` omits the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_ids: Option<Vec<String>>,
}

impl ChatCompletionRequest {
    /// A one-shot question to a model.
    pub fn new(model: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(question)],
            knowledge_ids: None,
        }
    }

    /// Scope retrieval to the given knowledge documents.
    pub fn with_knowledge(mut self, ids: Vec<String>) -> Self {
        self.knowledge_ids = Some(ids);
        self
    }
}

/// Response from `/chat/completions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// Candidate completions.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single candidate completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatChoice {
    /// Generated message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ChoiceMessage>,
}

/// Message carried by a choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Role of the sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Generated text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ChatChoice {
    /// Raw content of the message, empty when absent.
    pub fn content(&self) -> &str {
        self.message
            .as_ref()
            .and_then(|message| message.content.as_deref())
            .unwrap_or("")
    }

    /// Content with escaped `\n` sequences turned into line breaks.
    pub fn display_text(&self) -> String {
        unescape_newlines(self.content())
    }
}

impl ChatCompletion {
    /// Display text of every choice, in order.
    pub fn answers(&self) -> Vec<String> {
        self.choices.iter().map(ChatChoice::display_text).collect()
    }
}

/// Replace literal two-character `\n` sequences with real newlines.
pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
