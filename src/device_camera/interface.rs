use crate::error::AppError;
use image::DynamicImage;

/// Supplies one raster image on demand. `Ok(None)` means the user
/// produced no image (picker cancelled, source exhausted).
pub trait DeviceCamera: Send + Sync {
    fn request_image(&self) -> Result<Option<DynamicImage>, AppError>;
}
