//! Human-readable rendering of API outcomes.
//!
//! Every function returns the full text to print, newline-terminated, so the
//! command handlers only decide where it goes.

use std::fmt::Write;

use oweb_client::{ChatCompletion, HttpFailure, KnowledgeFile, ModelList};

/// Render a non-200 response: a `<prefix>: <status>` line followed by the raw body.
pub fn failure(prefix: &str, failure: &HttpFailure) -> String {
    format!("{}: {}\n{}\n", prefix, failure.status, failure.body)
}

/// Render a successful upload response.
pub fn upload(response: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string());
    format!("File uploaded successfully.\n{}\n", pretty)
}

/// Render the knowledge document listing.
pub fn knowledge(files: &[KnowledgeFile]) -> String {
    let mut out = String::from("Knowledge documents:\n");
    for file in files {
        let _ = writeln!(out, "- ID: {}", file.id);
        let _ = writeln!(out, "  Filename: {}", file.filename);
        let _ = writeln!(out, "  Collection: {}", file.collection_name());
        out.push('\n');
    }
    out
}

/// Render the model listing.
pub fn models(models: &ModelList) -> String {
    let mut out = String::from("Available models:\n");
    for model in &models.data {
        let _ = writeln!(out, "- {}", model.display_name());
    }
    out
}

/// Render a chat completion, one blank-line-separated block per choice.
pub fn answer(completion: &ChatCompletion) -> String {
    let mut out = String::from("Response:\n");
    for text in completion.answers() {
        out.push_str(&text);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure() {
        let text = failure(
            "Failed to retrieve models",
            &HttpFailure {
                status: 503,
                body: "upstream down".to_string(),
            },
        );
        assert_eq!(text, "Failed to retrieve models: 503\nupstream down\n");
    }

    #[test]
    fn test_upload_pretty_prints() {
        let text = upload(&json!({"id": "f1", "meta": {"name": "a.md"}}));
        assert!(text.starts_with("File uploaded successfully.\n{\n  \"id\": \"f1\""));
        assert!(text.contains("    \"name\": \"a.md\""));
    }

    #[test]
    fn test_knowledge_uses_placeholder_collection() {
        let files: Vec<KnowledgeFile> = serde_json::from_value(json!([
            {"id": "f1", "filename": "a.md", "meta": {"collection_name": "kb"}},
            {"id": "f2", "filename": "b.md"}
        ]))
        .unwrap();

        let text = knowledge(&files);
        assert_eq!(
            text,
            "Knowledge documents:\n\
             - ID: f1\n  Filename: a.md\n  Collection: kb\n\n\
             - ID: f2\n  Filename: b.md\n  Collection: N/A\n\n"
        );
    }

    #[test]
    fn test_knowledge_empty() {
        assert_eq!(knowledge(&[]), "Knowledge documents:\n");
    }

    #[test]
    fn test_models() {
        let list: ModelList = serde_json::from_value(json!({
            "data": [{"id": "llama3", "name": "Llama 3"}, {"id": "phi3"}]
        }))
        .unwrap();
        assert_eq!(models(&list), "Available models:\n- Llama 3\n- phi3\n");
    }

    #[test]
    fn test_answer_has_real_line_breaks() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "choices": [
                {"message": {"content": "line1\\nline2"}},
                {"message": {"content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(
            answer(&completion),
            "Response:\nline1\nline2\n\nsecond\n\n"
        );
    }
}
