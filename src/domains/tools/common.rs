//! Common utilities shared across tools.
//!
//! Result builders, argument parsing, and the bridge to the blocking thread
//! pool used for network and image work.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

use super::ToolError;

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result with a text summary and structured content.
///
/// Falls back to the plain text result if the data cannot be serialized.
pub fn structured_result<T: Serialize>(summary: String, data: T) -> CallToolResult {
    let mut result = success_result(summary);
    match serde_json::to_value(data) {
        Ok(value) => result.structured_content = Some(value),
        Err(e) => warn!("Dropping structured content: {}", e),
    }
    result
}

/// Deserialize the call arguments into a tool's parameter struct.
pub fn parse_arguments<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Turn a `json!` object literal into an rmcp schema.
pub fn object_schema(schema: serde_json::Value) -> Arc<JsonObject> {
    match schema {
        serde_json::Value::Object(map) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Run blocking tool logic on tokio's blocking pool.
///
/// `reqwest::blocking` spins up its own runtime, so it must never run on an
/// async worker thread. A panic in the worker becomes a tool error.
pub async fn run_blocking<F, T>(work: F) -> Result<T, ToolError>
where
    F: FnOnce() -> Result<T, ToolError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ToolError::execution_failed(e.to_string()))?
}

/// Extract the text of the first content item.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    match result.content.first().map(|c| &c.raw) {
        Some(RawContent::Text(text)) => text.text.clone(),
        other => panic!("expected text content, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Params {
        name: String,
        count: u32,
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_parse_arguments() {
        let params: Params = parse_arguments(args(json!({"name": "a", "count": 3}))).unwrap();
        assert_eq!(params.name, "a");
        assert_eq!(params.count, 3);
    }

    #[test]
    fn test_parse_arguments_reports_missing_field() {
        let err = parse_arguments::<Params>(args(json!({"name": "a"}))).unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments: missing field `count`"));
    }

    #[test]
    fn test_structured_result_keeps_text() {
        let result = structured_result("summary".to_string(), json!({"width": 4}));
        assert_eq!(result_text(&result), "summary");
        assert_eq!(result.structured_content, Some(json!({"width": 4})));
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_object_schema_rejects_non_objects() {
        assert!(object_schema(json!(["not", "an", "object"])).is_empty());
        assert_eq!(object_schema(json!({"type": "object"})).len(), 1);
    }

    #[tokio::test]
    async fn test_run_blocking_reports_panics() {
        let err = run_blocking(|| -> Result<(), ToolError> { panic!("boom") })
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Tool execution failed"));
    }
}
