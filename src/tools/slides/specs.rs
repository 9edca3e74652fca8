//! Registry view of the slides operations: name, description and JSON
//! schemas, plus a `Tool` impl the JSON-RPC shim can call.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::ops;
use super::types::parse_args;
use crate::clients::PresentationSource;
use crate::core::error::SlidesError;
use crate::core::tool::{Tool, ToolSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetPresentation,
    ListSlides,
    GetSlide,
    GetSlideNotes,
    GetPresentationContent,
}

fn presentation_id_schema() -> Value {
    json!({ "type": "string", "description": "The ID of the Google Slides presentation" })
}

fn slide_address_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "presentation_id": presentation_id_schema(),
            "slide_index": { "type": "integer", "description": "0-based index of the slide (use this OR slide_object_id)" },
            "slide_object_id": { "type": "string", "description": "Object ID of the slide (use this OR slide_index)" }
        },
        "required": ["presentation_id"]
    })
}

fn image_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "object_id": { "type": "string" },
            "content_url": { "type": "string" },
            "source_url": { "type": "string" },
            "alt_text": { "type": "string" }
        },
        "required": ["object_id", "content_url"]
    })
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::GetPresentation,
        Operation::ListSlides,
        Operation::GetSlide,
        Operation::GetSlideNotes,
        Operation::GetPresentationContent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::GetPresentation => "get_presentation",
            Operation::ListSlides => "list_slides",
            Operation::GetSlide => "get_slide",
            Operation::GetSlideNotes => "get_slide_notes",
            Operation::GetPresentationContent => "get_presentation_content",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::GetPresentation => {
                "Get metadata about a Google Slides presentation including title, slide count, locale, and revision ID"
            }
            Operation::ListSlides => {
                "List all slides in a Google Slides presentation with their titles and element counts"
            }
            Operation::GetSlide => "Get the content and elements of a specific slide by index or object ID",
            Operation::GetSlideNotes => "Get the speaker notes for a specific slide by index or object ID",
            Operation::GetPresentationContent => {
                "Get all slide content (text and images) in a single call, ideal for AI analysis of the entire presentation"
            }
        }
    }

    pub fn input_schema(self) -> Value {
        match self {
            Operation::GetPresentation | Operation::ListSlides => json!({
                "type": "object",
                "properties": { "presentation_id": presentation_id_schema() },
                "required": ["presentation_id"]
            }),
            Operation::GetSlide | Operation::GetSlideNotes => slide_address_schema(),
            Operation::GetPresentationContent => json!({
                "type": "object",
                "properties": {
                    "presentation_id": presentation_id_schema(),
                    "include_notes": { "type": "boolean", "description": "Include speaker notes for each slide", "default": false }
                },
                "required": ["presentation_id"]
            }),
        }
    }

    pub fn output_schema(self) -> Value {
        match self {
            Operation::GetPresentation => json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "slide_count": { "type": "integer" },
                    "locale": { "type": "string" },
                    "revision_id": { "type": "string" }
                },
                "required": ["title", "slide_count"]
            }),
            Operation::ListSlides => json!({
                "type": "object",
                "properties": {
                    "slides": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "object_id": { "type": "string" },
                                "index": { "type": "integer" },
                                "title": { "type": "string" },
                                "element_count": { "type": "integer" }
                            },
                            "required": ["object_id", "index", "element_count"]
                        }
                    }
                },
                "required": ["slides"]
            }),
            Operation::GetSlide => json!({
                "type": "object",
                "properties": {
                    "index": { "type": "integer" },
                    "object_id": { "type": "string" },
                    "title": { "type": "string" },
                    "text_content": { "type": "array", "items": { "type": "string" } },
                    "element_summary": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "object_id": { "type": "string" },
                                "element_type": { "type": "string" },
                                "description": { "type": "string" },
                                "image_url": { "type": "string" }
                            },
                            "required": ["object_id", "element_type"]
                        }
                    },
                    "images": { "type": "array", "items": image_schema() }
                },
                "required": ["index", "object_id", "text_content", "element_summary"]
            }),
            Operation::GetSlideNotes => json!({
                "type": "object",
                "properties": {
                    "index": { "type": "integer" },
                    "object_id": { "type": "string" },
                    "notes": { "type": "string" }
                },
                "required": ["index", "object_id", "notes"]
            }),
            Operation::GetPresentationContent => json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "slides": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "index": { "type": "integer" },
                                "object_id": { "type": "string" },
                                "title": { "type": "string" },
                                "text_content": { "type": "array", "items": { "type": "string" } },
                                "images": { "type": "array", "items": image_schema() },
                                "notes": { "type": "string" }
                            },
                            "required": ["index", "object_id", "text_content"]
                        }
                    }
                },
                "required": ["title", "slides"]
            }),
        }
    }

    /// Runs the operation and returns the MCP `tools/call` result shape.
    pub async fn invoke(self, source: &dyn PresentationSource, args: &Value) -> Result<Value, SlidesError> {
        let out = match self {
            Operation::GetPresentation => {
                ops::get_presentation(source, parse_args(args)?).await?.to_call_result_json()
            }
            Operation::ListSlides => ops::list_slides(source, parse_args(args)?).await?.to_call_result_json(),
            Operation::GetSlide => ops::get_slide(source, parse_args(args)?).await?.to_call_result_json(),
            Operation::GetSlideNotes => {
                ops::get_slide_notes(source, parse_args(args)?).await?.to_call_result_json()
            }
            Operation::GetPresentationContent => {
                ops::get_presentation_content(source, parse_args(args)?).await?.to_call_result_json()
            }
        };
        Ok(out)
    }
}

/// One operation bound to a presentation source.
pub struct SlidesTool {
    op: Operation,
    source: Arc<dyn PresentationSource>,
}

impl SlidesTool {
    pub fn new(op: Operation, source: Arc<dyn PresentationSource>) -> Self {
        Self { op, source }
    }
}

impl ToolSpec for SlidesTool {
    fn name(&self) -> &'static str {
        self.op.name()
    }
    fn description(&self) -> &'static str {
        self.op.description()
    }
    fn input_schema(&self) -> Value {
        self.op.input_schema()
    }
    fn output_schema(&self) -> Value {
        self.op.output_schema()
    }
}

#[async_trait]
impl Tool for SlidesTool {
    async fn call(&self, arguments: &Value) -> Result<Value, String> {
        self.op
            .invoke(self.source.as_ref(), arguments)
            .await
            .map_err(|e| e.to_string())
    }
}

/// Every operation bound to the same source.
pub fn slides_tools(source: Arc<dyn PresentationSource>) -> Vec<Arc<SlidesTool>> {
    Operation::ALL
        .iter()
        .map(|op| Arc::new(SlidesTool::new(*op, source.clone())))
        .collect()
}
