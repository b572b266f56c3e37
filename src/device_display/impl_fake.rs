use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::verdict::Verdict;
use image::DynamicImage;
use std::error::Error;
use std::sync::Arc;

pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
        }
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("init()")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("clear()")?;
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!("write_line({}, {})", line, text))?;
        Ok(())
    }

    fn show_image(&mut self, image: &DynamicImage) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!(
            "show_image({}x{})",
            image.width(),
            image.height()
        ))?;
        Ok(())
    }

    fn show_verdict(&mut self, verdict: Verdict) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!("show_verdict({:?})", verdict))?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!("show_error({})", message))?;
        Ok(())
    }
}
