use super::{Page, Presentation};
use crate::core::error::SlidesError;

/// A validated slide address: exactly one of position or object id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideAddress {
    Index(i64),
    ObjectId(String),
}

impl SlideAddress {
    /// An empty object id counts as absent.
    pub fn from_parts(index: Option<i64>, object_id: Option<&str>) -> Result<Self, SlidesError> {
        let object_id = object_id.filter(|id| !id.is_empty());
        match (index, object_id) {
            (Some(_), Some(_)) => Err(SlidesError::AmbiguousAddress),
            (None, None) => Err(SlidesError::MissingAddress),
            (Some(i), None) => Ok(Self::Index(i)),
            (None, Some(id)) => Ok(Self::ObjectId(id.to_string())),
        }
    }
}

/// Finds the addressed slide and its 0-based position.
pub fn locate<'a>(
    presentation: &'a Presentation,
    address: &SlideAddress,
) -> Result<(&'a Page, usize), SlidesError> {
    match address {
        SlideAddress::Index(i) => usize::try_from(*i)
            .ok()
            .and_then(|pos| presentation.slides.get(pos).map(|s| (s, pos)))
            .ok_or_else(|| SlidesError::IndexOutOfRange {
                presentation_id: presentation.presentation_id.clone(),
                index: *i,
                slide_count: presentation.slides.len(),
            }),
        SlideAddress::ObjectId(id) => presentation
            .slides
            .iter()
            .enumerate()
            .find(|(_, s)| s.object_id == *id)
            .map(|(pos, s)| (s, pos))
            .ok_or_else(|| SlidesError::SlideNotFound {
                presentation_id: presentation.presentation_id.clone(),
                object_id: id.clone(),
            }),
    }
}

pub fn resolve<'a>(
    presentation: &'a Presentation,
    index: Option<i64>,
    object_id: Option<&str>,
) -> Result<(&'a Page, usize), SlidesError> {
    let address = SlideAddress::from_parts(index, object_id)?;
    locate(presentation, &address)
}
