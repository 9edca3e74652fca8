use super::{ElementKind, PageElement, Shape};

const MAX_DESCRIPTION_CHARS: usize = 100;

/// Kind label, short description and (for images) the content URL of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: &'static str,
    pub description: String,
    pub image_url: String,
}

pub fn kind_label(kind: &ElementKind) -> &'static str {
    match kind {
        ElementKind::TextBox(_) => "TEXT_BOX",
        ElementKind::Shape(_) => "SHAPE",
        ElementKind::Image(_) => "IMAGE",
        ElementKind::Table(_) => "TABLE",
        ElementKind::Line(_) => "LINE",
        ElementKind::Video(_) => "VIDEO",
        ElementKind::WordArt(_) => "WORD_ART",
        ElementKind::SheetsChart(_) => "SHEETS_CHART",
        ElementKind::Group(_) => "GROUP",
        ElementKind::Unknown => "UNKNOWN",
    }
}

/// Never fails: anything unrecognised was already mapped to `ElementKind::Unknown`.
pub fn classify(element: &PageElement) -> Classification {
    let description = match &element.kind {
        ElementKind::TextBox(shape) => first_line_of(shape),
        ElementKind::Shape(shape) => {
            let line = first_line_of(shape);
            if line.is_empty() {
                shape.shape_type.clone()
            } else {
                line
            }
        }
        ElementKind::Image(_) => element.alt_text().to_string(),
        ElementKind::Table(t) => format!("table {}x{}", t.rows, t.columns),
        ElementKind::Line(l) => {
            let what = if l.category.is_empty() { &l.line_type } else { &l.category };
            if what.is_empty() {
                String::new()
            } else {
                format!("{what} line")
            }
        }
        ElementKind::Video(v) => match (v.source.is_empty(), v.id.is_empty()) {
            (true, true) => String::new(),
            (false, true) => format!("{} video", v.source),
            (true, false) => format!("video {}", v.id),
            (false, false) => format!("{} video {}", v.source, v.id),
        },
        ElementKind::WordArt(w) => w.rendered_text.trim().to_string(),
        ElementKind::SheetsChart(c) => {
            format!("chart {} from {}", c.chart_id, c.spreadsheet_id)
        }
        ElementKind::Group(children) => format!("group of {} elements", children.len()),
        ElementKind::Unknown => String::new(),
    };

    let image_url = match &element.kind {
        ElementKind::Image(img) => img.content_url.clone(),
        _ => String::new(),
    };

    Classification { kind: kind_label(&element.kind), description: truncate(description), image_url }
}

fn first_line_of(shape: &Shape) -> String {
    shape
        .text
        .as_ref()
        .map(|t| first_line(&t.plain_text()).to_string())
        .unwrap_or_default()
}

/// First non-blank line, trimmed.
pub(crate) fn first_line(text: &str) -> &str {
    text.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("")
}

fn truncate(s: String) -> String {
    match s.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((cut, _)) => format!("{}…", &s[..cut]),
        None => s,
    }
}
