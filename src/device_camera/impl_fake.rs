use crate::device_camera::interface::DeviceCamera;
use crate::error::AppError;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, Rgb, RgbImage};
use rand::Rng;
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn request_image(&self) -> Result<Option<DynamicImage>, AppError> {
        let _ = self.logger.info("Capturing image...");
        std::thread::sleep(std::time::Duration::from_millis(500));

        let mut rng = rand::rng();
        let color = Rgb([rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()]);

        let mut image = RgbImage::new(320, 240);
        for pixel in image.pixels_mut() {
            *pixel = color;
        }

        let _ = self.logger.info("Image captured");
        Ok(Some(DynamicImage::ImageRgb8(image)))
    }
}
