use super::extract::{extract_images, extract_notes, extract_slide_title, extract_text};
use super::{Presentation, PresentationContent, SlideContent};

/// Per-slide content for the whole deck, in slide order.
pub fn aggregate(presentation: &Presentation, include_notes: bool) -> PresentationContent {
    let slides = presentation
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| SlideContent {
            index,
            object_id: slide.object_id.clone(),
            title: extract_slide_title(slide),
            text_content: extract_text(slide),
            images: extract_images(slide),
            notes: if include_notes { extract_notes(slide) } else { String::new() },
        })
        .collect();

    PresentationContent { title: presentation.title.clone(), slides }
}
