//! Inputs and structured outputs of the slides operations.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::error::SlidesError;
use crate::domain::ImageInfo;

pub use crate::domain::{PresentationContent as GetPresentationContentOutput, SlideContent};

#[derive(Debug, Clone, Deserialize)]
pub struct PresentationInput {
    pub presentation_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlideInput {
    pub presentation_id: String,
    #[serde(default)]
    pub slide_index: Option<i64>,
    #[serde(default)]
    pub slide_object_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresentationContentInput {
    pub presentation_id: String,
    #[serde(default)]
    pub include_notes: bool,
}

/// Decode tool arguments; shape problems become `InvalidArguments`.
pub fn parse_args<T: DeserializeOwned>(args: &serde_json::Value) -> Result<T, SlidesError> {
    T::deserialize(args).map_err(|e| SlidesError::InvalidArguments(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPresentationOutput {
    pub title: String,
    pub slide_count: usize,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub locale: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub revision_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideInfo {
    pub object_id: String,
    pub index: usize,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub element_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSlidesOutput {
    pub slides: Vec<SlideInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSummary {
    pub object_id: String,
    pub element_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSlideOutput {
    pub index: usize,
    pub object_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub text_content: Vec<String>,
    pub element_summary: Vec<ElementSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSlideNotesOutput {
    pub index: usize,
    pub object_id: String,
    pub notes: String,
}
