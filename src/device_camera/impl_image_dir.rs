use crate::device_camera::interface::DeviceCamera;
use crate::error::AppError;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Plays the role of the photo picker: each shutter press hands out the
/// next image file from a directory, cycling when it reaches the end.
/// An empty directory behaves like a cancelled pick.
pub struct DeviceCameraImageDir {
    dir: PathBuf,
    next_index: Mutex<usize>,
    logger: Arc<dyn Logger>,
}

impl DeviceCameraImageDir {
    pub fn new(dir: PathBuf, logger: Arc<dyn Logger>) -> Self {
        Self {
            dir,
            next_index: Mutex::new(0),
            logger: logger.with_namespace("camera").with_namespace("image_dir"),
        }
    }

    fn image_paths(&self) -> Result<Vec<PathBuf>, AppError> {
        let entries =
            std::fs::read_dir(&self.dir).map_err(|e| AppError::Capture(e.to_string()))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("jpg") | Some("jpeg") | Some("png") | Some("bmp")
                )
            })
            .collect();

        paths.sort();
        Ok(paths)
    }
}

impl DeviceCamera for DeviceCameraImageDir {
    fn request_image(&self) -> Result<Option<DynamicImage>, AppError> {
        let paths = self.image_paths()?;
        if paths.is_empty() {
            let _ = self
                .logger
                .info(&format!("No images in {}", self.dir.display()));
            return Ok(None);
        }

        let mut next_index = self.next_index.lock().unwrap();
        let path = &paths[*next_index % paths.len()];
        *next_index += 1;

        let _ = self.logger.info(&format!("Picked {}", path.display()));

        let image = image::open(path).map_err(|e| AppError::Capture(e.to_string()))?;
        Ok(Some(image))
    }
}
