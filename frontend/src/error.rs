use thiserror::Error;

/// Failures that stay inside the slider widgets. None of these reach the user;
/// components log them and skip the affected work.
#[derive(Debug, Error)]
pub enum SliderError {
    #[error("element not found: {0}")]
    MissingElement(&'static str),

    #[error("slide width is not usable: {0}")]
    UnusableWidth(f64),

    #[error("invalid slider config: {0}")]
    Config(#[from] serde_json::Error),
}
