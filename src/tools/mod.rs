pub mod registry;
pub mod slides;
