//! Common utilities shared across tool definitions.
//!
//! Result builders for the rmcp and HTTP paths, and argument parsing.

use rmcp::model::{CallToolResult, Content};
use serde::{Serialize, de::DeserializeOwned};
use tracing::error;

use crate::domains::tools::ToolError;

/// Create an error result with a formatted message.
///
/// Does not log; callers log the failure where they have its context.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying `data` as structured content.
///
/// The same JSON is also sent as a text block for clients that ignore
/// structured content.
pub fn structured_result<T: Serialize>(data: &T) -> CallToolResult {
    match serde_json::to_value(data) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(structured.to_string())],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => {
            error!("Failed to serialize tool output: {}", e);
            error_result(&format!("Failed to serialize tool output: {}", e))
        }
    }
}

/// Convert a tool result into the JSON shape returned by the HTTP transport.
pub fn result_to_json(result: CallToolResult) -> serde_json::Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let (Some(structured), Some(object)) =
        (result.structured_content, response.as_object_mut())
    {
        object.insert("structuredContent".to_string(), structured);
    }

    response
}

/// Parse tool arguments from a JSON value.
///
/// `null` is treated as an empty argument object.
pub fn parse_arguments<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::ddi::test_support::WarningCounter;
    use serde::Deserialize;
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Debug, Deserialize)]
    struct ZoneArg {
        zone: String,
    }

    #[test]
    fn test_structured_result_mirrors_text() {
        let result = structured_result(&serde_json::json!({"total": 2}));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({"total": 2}))
        );
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_result_to_json_includes_structured_content() {
        let json = result_to_json(structured_result(&serde_json::json!({"total": 0})));
        assert_eq!(json["isError"], false);
        assert_eq!(json["structuredContent"]["total"], 0);
    }

    #[test]
    fn test_error_result_does_not_log() {
        let counter = WarningCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        tracing::subscriber::with_default(subscriber, || error_result("boom"));
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_result_to_json_error() {
        let json = result_to_json(error_result("boom"));
        assert_eq!(json["isError"], true);
        assert!(json.get("structuredContent").is_none());
    }

    #[test]
    fn test_parse_arguments() {
        let arg: ZoneArg = parse_arguments(serde_json::json!({"zone": "example.com"})).unwrap();
        assert_eq!(arg.zone, "example.com");

        let missing: Result<ZoneArg, _> = parse_arguments(serde_json::Value::Null);
        assert!(matches!(missing, Err(ToolError::InvalidArguments(_))));
    }
}
