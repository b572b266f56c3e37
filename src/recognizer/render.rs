use crate::device_display::interface::DeviceDisplay;
use crate::device_shutter::interface::DeviceShutter;
use crate::recognizer::core::{is_capture_enabled, Model};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay>>,
    device_shutter: Arc<dyn DeviceShutter>,
}

impl Render {
    pub fn new(
        device_display: Arc<Mutex<dyn DeviceDisplay>>,
        device_shutter: Arc<dyn DeviceShutter>,
    ) -> Self {
        Self {
            device_display,
            device_shutter,
        }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_shutter.set_enabled(is_capture_enabled(model));

        let mut device_display = self.device_display.lock().unwrap();
        device_display.clear()?;

        match model {
            Model::LoadingModel => {
                device_display.write_line(0, "Loading model...")?;
            }
            Model::ModelUnavailable { message } => {
                device_display.write_line(0, "Model unavailable")?;
                device_display.show_error(message)?;
            }
            Model::Idle { message } => {
                device_display.write_line(0, "Ready")?;
                device_display.write_line(1, "Press the shutter")?;
                if let Some(message) = message {
                    device_display.show_error(message)?;
                }
            }
            Model::Capturing => {
                device_display.write_line(0, "Capturing...")?;
            }
            Model::Classifying { image } => {
                device_display.write_line(0, "Classifying...")?;
                device_display.show_image(image)?;
            }
            Model::ShowingResult { verdict, image } => {
                device_display.write_line(1, "Press reset or shoot again")?;
                device_display.show_image(image)?;
                device_display.show_verdict(*verdict)?;
            }
        }

        Ok(())
    }
}
