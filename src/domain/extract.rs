//! Text, notes, title and image extraction over a page's element tree.
//!
//! All walks are in document order and descend into groups.

use super::classify::first_line;
use super::{ElementKind, ImageInfo, Page, PageElement, PlaceholderRole, Table};

/// One string per text-bearing element, empty ones skipped.
pub fn extract_text(page: &Page) -> Vec<String> {
    let mut out = Vec::new();
    collect_text(&page.elements, &mut out);
    out
}

fn collect_text(elements: &[PageElement], out: &mut Vec<String>) {
    for el in elements {
        if let ElementKind::Group(children) = &el.kind {
            collect_text(children, out);
            continue;
        }
        if let Some(text) = element_text(el) {
            if !text.is_empty() {
                out.push(text);
            }
        }
    }
}

/// Text of a single text-bearing element; `None` for kinds that never hold text.
fn element_text(el: &PageElement) -> Option<String> {
    match &el.kind {
        ElementKind::TextBox(shape) | ElementKind::Shape(shape) => {
            shape.text.as_ref().map(|t| t.plain_text())
        }
        ElementKind::WordArt(w) => Some(w.rendered_text.trim().to_string()),
        ElementKind::Table(t) => Some(table_text(t)),
        _ => None,
    }
}

fn table_text(table: &Table) -> String {
    table
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.plain_text())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Speaker notes of a slide, or `""` when there are none.
pub fn extract_notes(slide: &Page) -> String {
    let Some(notes) = slide.notes.as_deref() else {
        return String::new();
    };
    let elements = &notes.page.elements;

    let by_id = notes
        .speaker_notes_object_id
        .as_deref()
        .and_then(|id| elements.iter().find(|el| el.object_id == id));
    let body = by_id.or_else(|| {
        elements.iter().find(|el| match &el.kind {
            ElementKind::Shape(s) | ElementKind::TextBox(s) => {
                s.placeholder == Some(PlaceholderRole::Body)
            }
            _ => false,
        })
    });

    body.and_then(|el| match &el.kind {
        ElementKind::Shape(s) | ElementKind::TextBox(s) => s.text.as_ref().map(|t| t.plain_text()),
        _ => None,
    })
    .unwrap_or_default()
}

/// Title placeholder text if present, else the first line of the first text-bearing element.
pub fn extract_slide_title(slide: &Page) -> String {
    if let Some(title) = find_title_placeholder(&slide.elements) {
        return title;
    }
    extract_text(slide)
        .first()
        .map(|t| first_line(t).to_string())
        .unwrap_or_default()
}

fn find_title_placeholder(elements: &[PageElement]) -> Option<String> {
    elements.iter().find_map(|el| match &el.kind {
        ElementKind::Shape(s) | ElementKind::TextBox(s)
            if s.placeholder.is_some_and(PlaceholderRole::is_title) =>
        {
            let text = s.text.as_ref().map(|t| t.plain_text()).unwrap_or_default();
            Some(first_line(&text).to_string())
        }
        ElementKind::Group(children) => find_title_placeholder(children),
        _ => None,
    })
}

pub fn extract_images(page: &Page) -> Vec<ImageInfo> {
    let mut out = Vec::new();
    collect_images(&page.elements, &mut out);
    out
}

fn collect_images(elements: &[PageElement], out: &mut Vec<ImageInfo>) {
    for el in elements {
        match &el.kind {
            ElementKind::Image(img) => out.push(ImageInfo {
                object_id: el.object_id.clone(),
                content_url: img.content_url.clone(),
                source_url: img.source_url.clone(),
                alt_text: el.alt_text().to_string(),
            }),
            ElementKind::Group(children) => collect_images(children, out),
            _ => {}
        }
    }
}
