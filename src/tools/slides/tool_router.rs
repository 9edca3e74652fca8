use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::{CallToolResult, JsonObject, ServerCapabilities, ServerInfo};
use rmcp::ErrorData as McpError;

use super::ops;
use super::specs::Operation;
use super::types::parse_args;
use crate::clients::PresentationSource;
use crate::infra::runtime::mcp_transport::ServerHandler;

/// MCP handler for the slides tools. Cheap to clone; one per session.
#[derive(Clone)]
pub struct SlidesSvc {
    source: Arc<dyn PresentationSource>,
}

impl SlidesSvc {
    pub fn new(source: Arc<dyn PresentationSource>) -> Self {
        Self { source }
    }
}

impl ServerHandler for SlidesSvc {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only access to presentations (tools: get_presentation, list_slides, get_slide, \
                 get_slide_notes, get_presentation_content). Slides are addressed by 0-based \
                 slide_index or by slide_object_id, never both."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn args(params: Parameters<JsonObject>) -> serde_json::Value {
    serde_json::Value::Object(params.0)
}

#[rmcp::tool_router]
impl SlidesSvc {
    #[rmcp::tool(
        name = "get_presentation",
        description = "Get metadata about a Google Slides presentation including title, slide count, locale, and revision ID"
    )]
    async fn get_presentation(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        let input = parse_args(&args(params))?;
        let out = ops::get_presentation(self.source.as_ref(), input).await?;
        Ok(out.into_call_result())
    }

    #[rmcp::tool(
        name = "list_slides",
        description = "List all slides in a Google Slides presentation with their titles and element counts"
    )]
    async fn list_slides(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        let input = parse_args(&args(params))?;
        let out = ops::list_slides(self.source.as_ref(), input).await?;
        Ok(out.into_call_result())
    }

    #[rmcp::tool(
        name = "get_slide",
        description = "Get the content and elements of a specific slide by index or object ID"
    )]
    async fn get_slide(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        let input = parse_args(&args(params))?;
        let out = ops::get_slide(self.source.as_ref(), input).await?;
        Ok(out.into_call_result())
    }

    #[rmcp::tool(
        name = "get_slide_notes",
        description = "Get the speaker notes for a specific slide by index or object ID"
    )]
    async fn get_slide_notes(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        let input = parse_args(&args(params))?;
        let out = ops::get_slide_notes(self.source.as_ref(), input).await?;
        Ok(out.into_call_result())
    }

    #[rmcp::tool(
        name = "get_presentation_content",
        description = "Get all slide content (text and images) in a single call, ideal for AI analysis of the entire presentation"
    )]
    async fn get_presentation_content(&self, params: Parameters<JsonObject>) -> Result<CallToolResult, McpError> {
        let input = parse_args(&args(params))?;
        let out = ops::get_presentation_content(self.source.as_ref(), input).await?;
        Ok(out.into_call_result())
    }
}

pub type SlidesRouter = ToolRouter<SlidesSvc>;

fn schema_object(v: serde_json::Value) -> Arc<JsonObject> {
    Arc::new(v.as_object().cloned().unwrap_or_default())
}

impl SlidesSvc {
    /// Macro-generated routes with the typed input and output schemas of
    /// each operation in place of the generic argument map.
    pub fn router() -> SlidesRouter {
        let mut router = SlidesRouter::new();
        for mut route in Self::tool_router() {
            if let Some(op) = Operation::ALL.into_iter().find(|op| op.name() == route.name()) {
                route.attr.input_schema = schema_object(op.input_schema());
                route.attr.output_schema = Some(schema_object(op.output_schema()));
            }
            router.add_route(route);
        }
        router
    }
}

/// `(handler, router)` pair in the shape the rmcp transports want.
pub fn factory_with_source(source: Arc<dyn PresentationSource>) -> (SlidesSvc, SlidesRouter) {
    (SlidesSvc::new(source), SlidesSvc::router())
}

pub fn factory_from_env() -> (SlidesSvc, SlidesRouter) {
    let cfg = crate::infra::config::AppConfig::from_env_and_toml();
    factory_with_source(crate::clients::source_from_config(&cfg))
}
