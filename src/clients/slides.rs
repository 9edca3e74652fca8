use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Instant;

use super::PresentationSource;
use crate::core::error::FetchError;
use crate::domain::{
    ElementKind, Image, Line, NotesPage, Page, PageElement, PlaceholderRole, Presentation, Shape,
    SheetsChart, Table, TextBody, Video, WordArt,
};
use crate::infra::config::{AppConfig, ToolConfig, DEFAULT_SLIDES_BASE_URL};
use crate::infra::http::headers::{add_standard_headers, generate_request_id};
use crate::infra::runtime::limits::{make_http_client, make_http_client_with, retry_async};

/// Read-only Slides API client. The bearer token is taken as given.
#[derive(Clone)]
pub struct SlidesRemote {
    base: String,
    token: String,
    http: Client,
    retries: u32,
}

impl SlidesRemote {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        Self { base: base.into(), token: token.into(), http: make_http_client(), retries: 2 }
    }

    pub fn from_config(cfg: &ToolConfig, token: impl Into<String>) -> Self {
        let base = cfg
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SLIDES_BASE_URL.to_string());
        let http = make_http_client_with(cfg);
        let retries = cfg.retries.unwrap_or(2);
        Self { base, token: token.into(), http, retries }
    }

    /// `None` when no access token is configured.
    pub fn from_app_config(cfg: &AppConfig) -> Option<Self> {
        cfg.access_token
            .as_ref()
            .map(|token| Self::from_config(&cfg.slides, token.clone()))
    }

    /// `{base}/v1/presentations/{id}` with the id encoded as one path segment.
    pub fn presentation_url(&self, presentation_id: &str) -> Result<Url, FetchError> {
        let invalid = |reason: String| {
            FetchError::NotConfigured(format!("invalid slides base_url {}: {reason}", self.base))
        };
        let mut url = Url::parse(&self.base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v1", "presentations"])
            .push(presentation_id);
        Ok(url)
    }

    pub async fn fetch(&self, presentation_id: &str) -> Result<Presentation, FetchError> {
        let url = self.presentation_url(presentation_id)?;
        tracing::debug!(endpoint = %url, "slides.get_presentation request");
        let req_id = generate_request_id();
        let start = Instant::now();
        let res: Result<PresentationWire, FetchError> = retry_async(
            self.retries,
            |_| {
                let http = self.http.clone();
                let url = url.clone();
                let req_id = req_id.clone();
                let token = self.token.clone();
                async move {
                    let (builder, _rid) = add_standard_headers(http.get(url), Some(req_id));
                    let resp = builder
                        .bearer_auth(token)
                        .send()
                        .await
                        .map_err(|e| FetchError::Transport(e.to_string()))?;
                    let status = resp.status();
                    if !status.is_success() {
                        let body = resp.text().await.unwrap_or_default();
                        return Err(FetchError::Status { status: status.as_u16(), body });
                    }
                    resp.json::<PresentationWire>()
                        .await
                        .map_err(|e| FetchError::Decode(e.to_string()))
                }
            },
            FetchError::is_retryable,
        )
        .await;
        if res.is_err() {
            crate::infra::logging::log_metric("slides.fetch", "remote_error_total", 1.0);
        }
        let wire = res?;
        let elapsed_ms = start.elapsed().as_millis() as f64;
        crate::infra::logging::log_metric("slides.fetch", "remote_latency_ms", elapsed_ms);
        Ok(wire.into())
    }
}

#[async_trait::async_trait]
impl PresentationSource for SlidesRemote {
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation, FetchError> {
        self.fetch(presentation_id).await
    }
}

/// Decode a `presentations.get` JSON body into the domain graph.
pub fn parse_presentation(value: &serde_json::Value) -> Result<Presentation, FetchError> {
    PresentationWire::deserialize(value)
        .map(Presentation::from)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

// Wire shapes of the Slides v1 REST API. Only the fields we read are declared.

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PresentationWire {
    presentation_id: String,
    title: String,
    locale: String,
    revision_id: String,
    slides: Vec<PageWire>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PageWire {
    object_id: String,
    page_elements: Vec<PageElementWire>,
    slide_properties: Option<SlidePropertiesWire>,
    notes_properties: Option<NotesPropertiesWire>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct SlidePropertiesWire {
    notes_page: Option<Box<PageWire>>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct NotesPropertiesWire {
    speaker_notes_object_id: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PageElementWire {
    object_id: String,
    title: String,
    description: String,
    shape: Option<ShapeWire>,
    image: Option<ImageWire>,
    table: Option<TableWire>,
    line: Option<LineWire>,
    video: Option<VideoWire>,
    word_art: Option<WordArtWire>,
    sheets_chart: Option<SheetsChartWire>,
    element_group: Option<GroupWire>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ShapeWire {
    shape_type: String,
    text: Option<TextContentWire>,
    placeholder: Option<PlaceholderWire>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PlaceholderWire {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct TextContentWire {
    text_elements: Vec<TextElementWire>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct TextElementWire {
    text_run: Option<TextRunWire>,
    auto_text: Option<TextRunWire>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TextRunWire {
    content: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ImageWire {
    content_url: String,
    source_url: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct TableWire {
    rows: usize,
    columns: usize,
    table_rows: Vec<TableRowWire>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct TableRowWire {
    table_cells: Vec<TableCellWire>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TableCellWire {
    text: Option<TextContentWire>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct LineWire {
    line_type: String,
    line_category: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct VideoWire {
    url: String,
    source: String,
    id: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct WordArtWire {
    rendered_text: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct SheetsChartWire {
    spreadsheet_id: String,
    chart_id: i64,
    content_url: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct GroupWire {
    children: Vec<PageElementWire>,
}

impl From<PresentationWire> for Presentation {
    fn from(w: PresentationWire) -> Self {
        Presentation {
            presentation_id: w.presentation_id,
            title: w.title,
            locale: w.locale,
            revision_id: w.revision_id,
            slides: w.slides.into_iter().map(Page::from).collect(),
        }
    }
}

impl From<PageWire> for Page {
    fn from(w: PageWire) -> Self {
        let notes = w
            .slide_properties
            .and_then(|p| p.notes_page)
            .map(|notes_page| {
                let speaker_notes_object_id = notes_page
                    .notes_properties
                    .as_ref()
                    .and_then(|p| p.speaker_notes_object_id.clone());
                Box::new(NotesPage { page: Page::from(*notes_page), speaker_notes_object_id })
            });
        Page {
            object_id: w.object_id,
            elements: w.page_elements.into_iter().map(PageElement::from).collect(),
            notes,
        }
    }
}

impl From<TextContentWire> for TextBody {
    fn from(w: TextContentWire) -> Self {
        TextBody::new(
            w.text_elements
                .into_iter()
                .filter_map(|el| el.text_run.or(el.auto_text))
                .map(|run| run.content),
        )
    }
}

impl From<ShapeWire> for Shape {
    fn from(w: ShapeWire) -> Self {
        Shape {
            shape_type: w.shape_type,
            text: w.text.map(TextBody::from),
            placeholder: w.placeholder.map(|p| PlaceholderRole::from_api(&p.kind)),
        }
    }
}

impl From<PageElementWire> for PageElement {
    fn from(w: PageElementWire) -> Self {
        let kind = if let Some(shape) = w.shape {
            let shape = Shape::from(shape);
            if shape.shape_type == "TEXT_BOX" && shape.placeholder.is_none() {
                ElementKind::TextBox(shape)
            } else {
                ElementKind::Shape(shape)
            }
        } else if let Some(img) = w.image {
            ElementKind::Image(Image { content_url: img.content_url, source_url: img.source_url })
        } else if let Some(t) = w.table {
            let cells = t
                .table_rows
                .into_iter()
                .map(|row| {
                    row.table_cells
                        .into_iter()
                        .map(|c| c.text.map(TextBody::from).unwrap_or_default())
                        .collect()
                })
                .collect();
            ElementKind::Table(Table { rows: t.rows, columns: t.columns, cells })
        } else if let Some(l) = w.line {
            ElementKind::Line(Line { line_type: l.line_type, category: l.line_category })
        } else if let Some(v) = w.video {
            ElementKind::Video(Video { source: v.source, id: v.id, url: v.url })
        } else if let Some(wa) = w.word_art {
            ElementKind::WordArt(WordArt { rendered_text: wa.rendered_text })
        } else if let Some(c) = w.sheets_chart {
            ElementKind::SheetsChart(SheetsChart {
                spreadsheet_id: c.spreadsheet_id,
                chart_id: c.chart_id,
                content_url: c.content_url,
            })
        } else if let Some(g) = w.element_group {
            ElementKind::Group(g.children.into_iter().map(PageElement::from).collect())
        } else {
            ElementKind::Unknown
        };
        PageElement { object_id: w.object_id, title: w.title, description: w.description, kind }
    }
}
