//! Rendered summaries. Each one reads only its structured output.

use std::fmt::Write as _;

use super::types::{
    GetPresentationContentOutput, GetPresentationOutput, GetSlideNotesOutput, GetSlideOutput,
    ListSlidesOutput,
};
use crate::core::content::Summary;

const UNTITLED: &str = "(untitled)";
const NO_ALT_TEXT: &str = "(no alt text)";

fn or_untitled(title: &str) -> &str {
    if title.is_empty() {
        UNTITLED
    } else {
        title
    }
}

impl Summary for GetPresentationOutput {
    fn summary(&self) -> String {
        format!(
            "Presentation: {}\nSlides: {}\nLocale: {}\nRevision: {}",
            self.title, self.slide_count, self.locale, self.revision_id
        )
    }
}

impl Summary for ListSlidesOutput {
    fn summary(&self) -> String {
        let mut out = String::new();
        for s in &self.slides {
            let _ = writeln!(
                out,
                "Slide {} [{}]: {} ({} elements)",
                s.index,
                s.object_id,
                or_untitled(&s.title),
                s.element_count
            );
        }
        out
    }
}

impl Summary for GetSlideOutput {
    fn summary(&self) -> String {
        let mut out = format!("Slide {}: {}\n\n", self.index, or_untitled(&self.title));
        out.push_str("Text content:\n");
        for text in &self.text_content {
            let _ = writeln!(out, "  - {text}");
        }
        if !self.images.is_empty() {
            let _ = writeln!(out, "\nImages ({}):", self.images.len());
            for img in &self.images {
                let alt = if img.alt_text.is_empty() { NO_ALT_TEXT } else { &img.alt_text };
                let _ = writeln!(out, "  - [{}] {}\n    URL: {}", img.object_id, alt, img.content_url);
            }
        }
        out.push_str("\nElements:\n");
        for el in &self.element_summary {
            if el.description.is_empty() {
                let _ = writeln!(out, "  - [{}] {}", el.object_id, el.element_type);
            } else {
                let _ = writeln!(out, "  - [{}] {}: {}", el.object_id, el.element_type, el.description);
            }
        }
        out
    }
}

impl Summary for GetSlideNotesOutput {
    fn summary(&self) -> String {
        if self.notes.is_empty() {
            format!("Slide {} has no speaker notes.", self.index)
        } else {
            format!("Speaker notes for slide {}:\n\n{}", self.index, self.notes)
        }
    }
}

impl Summary for GetPresentationContentOutput {
    fn summary(&self) -> String {
        let mut out = format!("Presentation: {} ({} slides)\n\n", self.title, self.slides.len());
        for slide in &self.slides {
            let _ = writeln!(out, "--- Slide {}: {} ---", slide.index, or_untitled(&slide.title));
            for text in &slide.text_content {
                let _ = writeln!(out, "  {text}");
            }
            if !slide.images.is_empty() {
                let _ = writeln!(out, "  [{} image(s)]", slide.images.len());
            }
            if !slide.notes.is_empty() {
                let _ = writeln!(out, "  Notes: {}", slide.notes);
            }
            out.push('\n');
        }
        out
    }
}
