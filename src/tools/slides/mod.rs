//! Read-only presentation tools over a `PresentationSource`.

pub mod ops;
pub mod render;
pub mod specs;
pub mod tool_router;
pub mod types;
