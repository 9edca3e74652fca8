pub mod slides;

use std::{future::Future, pin::Pin, sync::Arc};

use crate::core::error::FetchError;
use crate::domain::Presentation;
use crate::infra::config::AppConfig;

/// The one external collaborator the core depends on: a pre-authenticated fetch of
/// the whole presentation document graph.
#[async_trait::async_trait]
pub trait PresentationSource: Send + Sync + 'static {
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation, FetchError>;
}

type FetchFuture = Pin<Box<dyn Future<Output = Result<Presentation, FetchError>> + Send>>;

/// Thin wrapper around a boxed async fn, for tests and for the unconfigured fallback.
#[derive(Clone)]
pub struct FnSource {
    inner: Arc<dyn Fn(String) -> FetchFuture + Send + Sync>,
}

impl FnSource {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Presentation, FetchError>> + Send + 'static,
    {
        Self { inner: Arc::new(move |s| Box::pin(f(s))) }
    }

    /// Always returns a clone of `presentation`, whatever id is asked for.
    pub fn fixed(presentation: Presentation) -> Self {
        Self::new(move |_id: String| {
            let p = presentation.clone();
            async move { Ok(p) }
        })
    }
}

#[async_trait::async_trait]
impl PresentationSource for FnSource {
    async fn get_presentation(&self, presentation_id: &str) -> Result<Presentation, FetchError> {
        (self.inner)(presentation_id.to_owned()).await
    }
}

/// The live Slides client when a token is configured, otherwise a source that
/// fails every fetch with an actionable message so the server still starts.
pub fn source_from_config(cfg: &AppConfig) -> Arc<dyn PresentationSource> {
    match slides::SlidesRemote::from_app_config(cfg) {
        Some(remote) => Arc::new(remote),
        None => {
            tracing::warn!("SLIDES_ACCESS_TOKEN not set; slides tools will report an error");
            Arc::new(FnSource::new(|_id: String| async move {
                Err(FetchError::NotConfigured(
                    "SLIDES_ACCESS_TOKEN not configured; set it to enable the slides tools".into(),
                ))
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fn_source_passes_the_id_through() {
        let src = FnSource::new(|id: String| async move {
            Ok(Presentation { presentation_id: id, ..Presentation::default() })
        });
        let p = src.get_presentation("abc").await.unwrap();
        assert_eq!(p.presentation_id, "abc");
    }

    #[tokio::test]
    async fn fixed_source_returns_the_same_document() {
        let src = FnSource::fixed(Presentation { title: "T".into(), ..Presentation::default() });
        assert_eq!(src.get_presentation("x").await.unwrap().title, "T");
        assert_eq!(src.get_presentation("y").await.unwrap().title, "T");
    }

    #[tokio::test]
    async fn missing_token_yields_not_configured_source() {
        let cfg = AppConfig::default();
        let src = source_from_config(&cfg);
        let err = src.get_presentation("abc").await.unwrap_err();
        assert!(matches!(err, FetchError::NotConfigured(ref m) if m.contains("SLIDES_ACCESS_TOKEN")));
    }
}
