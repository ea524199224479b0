//! Request and response envelopes for calling tools over plain HTTP.

use serde::{Deserialize, Serialize};

/// Body of a tool call request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInput {
    /// The name of the tool to execute.
    pub tool: String,

    /// The arguments to pass to the tool. Omitted means no arguments.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

/// Body of a successful tool call. Failures are reported as `{"error": ..}`
/// with a non-2xx status instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub success: bool,
    pub data: serde_json::Value,
}

impl ToolOutput {
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_input_arguments_default_to_null() {
        let input: ToolInput = serde_json::from_str(r#"{"tool": "list_zones"}"#).unwrap();
        assert_eq!(input.tool, "list_zones");
        assert!(input.arguments.is_null());
    }

    #[test]
    fn test_tool_output_success_shape() {
        let json = serde_json::to_value(ToolOutput::success(serde_json::json!([]))).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": []}));
    }
}
