//! Structured result + rendered summary pair returned by every operation.

use serde::Serialize;
use serde_json::{json, Value as JsonValue};

/// One formatting function per output type. The summary is derived from the
/// structured value only, so the two forms cannot drift apart.
pub trait Summary {
    fn summary(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput<T> {
    pub structured: T,
    pub summary: String,
}

impl<T: Summary> ToolOutput<T> {
    pub fn new(structured: T) -> Self {
        let summary = structured.summary();
        Self { structured, summary }
    }
}

impl<T: Serialize> ToolOutput<T> {
    pub fn structured_json(&self) -> JsonValue {
        serde_json::to_value(&self.structured).unwrap_or(JsonValue::Null)
    }

    /// MCP `tools/call` result shape, used where rmcp is not in the loop.
    pub fn to_call_result_json(&self) -> JsonValue {
        json!({
            "content": [{ "type": "text", "text": self.summary }],
            "structuredContent": self.structured_json(),
            "isError": false
        })
    }

    pub fn into_call_result(self) -> rmcp::model::CallToolResult {
        let structured = self.structured_json();
        let mut result =
            rmcp::model::CallToolResult::success(vec![rmcp::model::Content::text(self.summary)]);
        result.structured_content = Some(structured);
        result
    }
}
