use thiserror::Error;

/// Failure of the upstream document fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    NotConfigured(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid presentation document: {0}")]
    Decode(String),
}

impl FetchError {
    /// Server errors and transport failures are worth another attempt; 4xx never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport(_) => true,
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::NotConfigured(_) | FetchError::Decode(_) => false,
        }
    }
}

/// Operation-level failure. Never embedded in a structured payload.
#[derive(Debug, Error)]
pub enum SlidesError {
    #[error("both slide_index and slide_object_id were provided; supply exactly one")]
    AmbiguousAddress,
    #[error("either slide_index or slide_object_id must be provided")]
    MissingAddress,
    #[error("slide index {index} out of range for presentation {presentation_id} ({slide_count} slides)")]
    IndexOutOfRange { presentation_id: String, index: i64, slide_count: usize },
    #[error("slide with object ID {object_id} not found in presentation {presentation_id}")]
    SlideNotFound { presentation_id: String, object_id: String },
    #[error("failed to get presentation {presentation_id}: {source}")]
    UpstreamFetchFailed {
        presentation_id: String,
        #[source]
        source: FetchError,
    },
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl SlidesError {
    /// True for errors caused by the caller's input rather than the upstream document store.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SlidesError::UpstreamFetchFailed { .. })
    }
}

impl From<SlidesError> for rmcp::ErrorData {
    fn from(e: SlidesError) -> Self {
        let msg = e.to_string();
        match e {
            SlidesError::SlideNotFound { .. } => rmcp::ErrorData::resource_not_found(msg, None),
            SlidesError::UpstreamFetchFailed { .. } => rmcp::ErrorData::internal_error(msg, None),
            _ => rmcp::ErrorData::invalid_params(msg, None),
        }
    }
}
