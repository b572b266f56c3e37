use thiserror::Error;

/// Everything the classification pipeline can report to the user.
///
/// `ModelLoad` is fatal for the session: the machine parks in
/// `ModelUnavailable` and the shutter stays disabled. The rest are
/// recoverable; the user re-triggers capture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("failed to load classification model: {0}")]
    ModelLoad(String),

    #[error("failed to capture image: {0}")]
    Capture(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("model produced no classifiable observations")]
    UnexpectedResultShape,
}
