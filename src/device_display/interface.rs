use crate::verdict::Verdict;
use image::DynamicImage;
use std::error::Error;

/// The user-facing screen: two status lines, the captured photo, a
/// verdict surface, and a dismissible error surface (the modal-alert
/// analog).
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Clear both status lines, the photo, and any verdict.
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a status line (0 or 1).
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show the captured photo; backends without an image surface may
    /// ignore it.
    fn show_image(&mut self, image: &DynamicImage) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show the verdict prominently, with a short affirmation animation
    /// where the backend supports one.
    fn show_verdict(&mut self, verdict: Verdict) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Surface an error message; stays up until the next `clear`.
    fn show_error(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
