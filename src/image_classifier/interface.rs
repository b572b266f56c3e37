use crate::error::AppError;
use image::DynamicImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

/// Wraps the pre-trained model. `load` runs once at startup and may fail
/// for the whole session; `classify` returns labeled confidences in
/// descending confidence order.
pub trait ImageClassifier: Send + Sync {
    fn load(&self) -> Result<(), AppError>;
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, AppError>;
}
