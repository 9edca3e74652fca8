//! The five read-only operations. Each one validates its input, fetches the
//! presentation exactly once and builds a structured output plus summary.

use crate::clients::PresentationSource;
use crate::core::content::ToolOutput;
use crate::core::error::SlidesError;
use crate::domain::aggregate::aggregate;
use crate::domain::classify::classify;
use crate::domain::extract::{extract_images, extract_notes, extract_slide_title, extract_text};
use crate::domain::resolve::{locate, SlideAddress};
use crate::domain::Presentation;

use super::types::{
    ElementSummary, GetPresentationContentOutput, GetPresentationOutput, GetSlideNotesOutput,
    GetSlideOutput, ListSlidesOutput, PresentationContentInput, PresentationInput, SlideInfo,
    SlideInput,
};

async fn fetch(source: &dyn PresentationSource, presentation_id: &str) -> Result<Presentation, SlidesError> {
    if presentation_id.trim().is_empty() {
        return Err(SlidesError::InvalidArguments("presentation_id must not be empty".into()));
    }
    source
        .get_presentation(presentation_id)
        .await
        .map_err(|source| {
            tracing::warn!(presentation_id, error = %source, "presentation fetch failed");
            SlidesError::UpstreamFetchFailed { presentation_id: presentation_id.to_string(), source }
        })
}

fn address_of(input: &SlideInput) -> Result<SlideAddress, SlidesError> {
    SlideAddress::from_parts(input.slide_index, input.slide_object_id.as_deref())
}

pub async fn get_presentation(
    source: &dyn PresentationSource,
    input: PresentationInput,
) -> Result<ToolOutput<GetPresentationOutput>, SlidesError> {
    tracing::debug!(presentation_id = %input.presentation_id, "get_presentation");
    let p = fetch(source, &input.presentation_id).await?;
    Ok(ToolOutput::new(GetPresentationOutput {
        slide_count: p.slides.len(),
        title: p.title,
        locale: p.locale,
        revision_id: p.revision_id,
    }))
}

pub async fn list_slides(
    source: &dyn PresentationSource,
    input: PresentationInput,
) -> Result<ToolOutput<ListSlidesOutput>, SlidesError> {
    tracing::debug!(presentation_id = %input.presentation_id, "list_slides");
    let p = fetch(source, &input.presentation_id).await?;
    let slides = p
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| SlideInfo {
            object_id: slide.object_id.clone(),
            index,
            title: extract_slide_title(slide),
            element_count: slide.elements.len(),
        })
        .collect();
    Ok(ToolOutput::new(ListSlidesOutput { slides }))
}

pub async fn get_slide(
    source: &dyn PresentationSource,
    input: SlideInput,
) -> Result<ToolOutput<GetSlideOutput>, SlidesError> {
    let address = address_of(&input)?;
    tracing::debug!(presentation_id = %input.presentation_id, ?address, "get_slide");
    let p = fetch(source, &input.presentation_id).await?;
    let (slide, index) = locate(&p, &address)?;

    let element_summary = slide
        .elements
        .iter()
        .map(|el| {
            let c = classify(el);
            ElementSummary {
                object_id: el.object_id.clone(),
                element_type: c.kind.to_string(),
                description: c.description,
                image_url: c.image_url,
            }
        })
        .collect();

    Ok(ToolOutput::new(GetSlideOutput {
        index,
        object_id: slide.object_id.clone(),
        title: extract_slide_title(slide),
        text_content: extract_text(slide),
        element_summary,
        images: extract_images(slide),
    }))
}

pub async fn get_slide_notes(
    source: &dyn PresentationSource,
    input: SlideInput,
) -> Result<ToolOutput<GetSlideNotesOutput>, SlidesError> {
    let address = address_of(&input)?;
    tracing::debug!(presentation_id = %input.presentation_id, ?address, "get_slide_notes");
    let p = fetch(source, &input.presentation_id).await?;
    let (slide, index) = locate(&p, &address)?;
    Ok(ToolOutput::new(GetSlideNotesOutput {
        index,
        object_id: slide.object_id.clone(),
        notes: extract_notes(slide),
    }))
}

pub async fn get_presentation_content(
    source: &dyn PresentationSource,
    input: PresentationContentInput,
) -> Result<ToolOutput<GetPresentationContentOutput>, SlidesError> {
    tracing::debug!(
        presentation_id = %input.presentation_id,
        include_notes = input.include_notes,
        "get_presentation_content"
    );
    let p = fetch(source, &input.presentation_id).await?;
    Ok(ToolOutput::new(aggregate(&p, input.include_notes)))
}
