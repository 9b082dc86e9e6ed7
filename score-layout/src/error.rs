use thiserror;

#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Too few notes for tuplet: expected at least 2, got {0}")]
    InsufficientNotes(usize),
    #[error("Can not draw without a render target: {0}")]
    MissingRenderTarget(String),
    #[error("Unsupported format: `{0}`")]
    UnsupportedFormat(String),
}
pub type LayoutResult<T> = Result<T, LayoutError>;
