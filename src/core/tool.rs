use async_trait::async_trait;

/// Metadata every operation exposes to the hosting layer.
pub trait ToolSpec {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
    fn output_schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object" })
    }
}

/// Tool = Spec + call. The call result is the MCP `tools/call` result shape.
#[async_trait]
pub trait Tool: ToolSpec + Send + Sync {
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, String>;
}
