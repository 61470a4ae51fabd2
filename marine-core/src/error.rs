//! Error types.

use thiserror::Error;

/// Failures of the external image classifier.
///
/// Every variant ends up as the same user-facing "analysis failed"
/// notification; the distinction only matters for logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// The JS bridge (or the window itself) is missing.
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    /// Downloading or instantiating the pretrained model failed.
    #[error("model load failed: {0}")]
    ModelLoad(String),

    /// The model threw while running on the image.
    #[error("inference failed: {0}")]
    Inference(String),

    /// Inference resolved, but not to a list of `{label, score}` objects.
    #[error("malformed classifier output: {0}")]
    MalformedOutput(String),

    /// The selected file cannot be handed to the model.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),
}

/// Errors raised while reading [`crate::SiteConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The inline JSON document did not parse.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but holds values the page cannot use.
    #[error("invalid config: {0}")]
    Invalid(String),
}
