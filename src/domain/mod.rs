//! Presentation document graph and the read-only extraction core built on it.

pub mod aggregate;
pub mod classify;
pub mod extract;
pub mod resolve;

use serde::{Deserialize, Serialize};

/// A fetched presentation. Built fresh for every operation and dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub presentation_id: String,
    pub title: String,
    pub locale: String,
    pub revision_id: String,
    pub slides: Vec<Page>,
}

/// A slide or a notes page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub object_id: String,
    pub elements: Vec<PageElement>,
    /// Only populated on slides.
    pub notes: Option<Box<NotesPage>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotesPage {
    pub page: Page,
    /// Object id of the shape holding the speaker notes, when the source names one.
    pub speaker_notes_object_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    pub object_id: String,
    /// Alt-text title.
    pub title: String,
    /// Alt-text description.
    pub description: String,
    pub kind: ElementKind,
}

/// Closed set of element kinds. Exactly one payload per element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    TextBox(Shape),
    Shape(Shape),
    Image(Image),
    Table(Table),
    Line(Line),
    Video(Video),
    WordArt(WordArt),
    SheetsChart(SheetsChart),
    Group(Vec<PageElement>),
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    pub shape_type: String,
    pub text: Option<TextBody>,
    pub placeholder: Option<PlaceholderRole>,
}

/// Ordered text runs of one element. Paragraph breaks arrive inside the runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBody {
    pub runs: Vec<String>,
}

impl TextBody {
    pub fn new<I, S>(runs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { runs: runs.into_iter().map(Into::into).collect() }
    }

    /// All runs concatenated, outer whitespace trimmed.
    pub fn plain_text(&self) -> String {
        self.runs.concat().trim().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderRole {
    Title,
    CenteredTitle,
    Subtitle,
    Body,
    Other,
}

impl PlaceholderRole {
    pub fn from_api(s: &str) -> Self {
        match s {
            "TITLE" => Self::Title,
            "CENTERED_TITLE" => Self::CenteredTitle,
            "SUBTITLE" => Self::Subtitle,
            "BODY" => Self::Body,
            _ => Self::Other,
        }
    }

    pub fn is_title(self) -> bool {
        matches!(self, Self::Title | Self::CenteredTitle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    /// Short-lived fetch URL.
    pub content_url: String,
    /// Original insertion source, may be empty.
    pub source_url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: usize,
    pub columns: usize,
    /// Cell text, row-major.
    pub cells: Vec<Vec<TextBody>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub line_type: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Video {
    pub source: String,
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordArt {
    pub rendered_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetsChart {
    pub spreadsheet_id: String,
    pub chart_id: i64,
    pub content_url: String,
}

impl PageElement {
    pub fn new(object_id: impl Into<String>, kind: ElementKind) -> Self {
        Self { object_id: object_id.into(), title: String::new(), description: String::new(), kind }
    }

    /// Alt text as the source exposes it: description first, then title.
    pub fn alt_text(&self) -> &str {
        if !self.description.is_empty() {
            &self.description
        } else {
            &self.title
        }
    }
}

/// Derived image record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub object_id: String,
    pub content_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alt_text: String,
}

/// Everything extracted from one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    pub index: usize,
    pub object_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub text_content: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageInfo>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationContent {
    pub title: String,
    pub slides: Vec<SlideContent>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_concatenates_runs_and_trims() {
        let body = TextBody::new(["Hello ", "world\n", "again\n"]);
        assert_eq!(body.plain_text(), "Hello world\nagain");
    }

    #[test]
    fn alt_text_prefers_description() {
        let mut el = PageElement::new("i", ElementKind::Image(Image::default()));
        el.title = "t".into();
        assert_eq!(el.alt_text(), "t");
        el.description = "d".into();
        assert_eq!(el.alt_text(), "d");
    }

    #[test]
    fn placeholder_roles_parse_from_api_names() {
        assert!(PlaceholderRole::from_api("CENTERED_TITLE").is_title());
        assert_eq!(PlaceholderRole::from_api("BODY"), PlaceholderRole::Body);
        assert_eq!(PlaceholderRole::from_api("SLIDE_NUMBER"), PlaceholderRole::Other);
    }

    #[test]
    fn slide_content_omits_empty_optional_fields() {
        let sc = SlideContent {
            index: 0,
            object_id: "s".into(),
            title: String::new(),
            text_content: vec![],
            images: vec![],
            notes: String::new(),
        };
        let v = serde_json::to_value(&sc).unwrap();
        assert!(v.get("notes").is_none());
        assert!(v.get("images").is_none());
        assert_eq!(v["text_content"], serde_json::json!([]));
    }
}
