use crate::config::Config;
use crate::device_camera::{impl_fake::DeviceCameraFake, interface::DeviceCamera};
use crate::device_display::{impl_fake::DeviceDisplayFake, interface::DeviceDisplay};
use crate::device_shutter::{impl_fake::DeviceShutterFake, interface::DeviceShutter};
use crate::image_classifier::{impl_fake::ImageClassifierFake, interface::ImageClassifier};
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::recognizer::main::Recognizer;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: Arc<dyn Logger>,
    pub device_camera: Arc<dyn DeviceCamera>,
    pub device_shutter: Arc<dyn DeviceShutter>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay>>,
    pub image_classifier: Arc<dyn ImageClassifier>,
    pub recognizer: Recognizer,
}

impl Fixture {
    pub fn new() -> Self {
        let config = Config::default();
        let logger: Arc<dyn Logger> = Arc::new(LoggerConsole::new(config.logger_timezone));
        let device_camera: Arc<dyn DeviceCamera> = Arc::new(DeviceCameraFake::new(logger.clone()));
        let device_shutter: Arc<dyn DeviceShutter> =
            Arc::new(DeviceShutterFake::new(logger.clone()));
        let device_display: Arc<Mutex<dyn DeviceDisplay>> =
            Arc::new(Mutex::new(DeviceDisplayFake::new(logger.clone())));
        let image_classifier: Arc<dyn ImageClassifier> =
            Arc::new(ImageClassifierFake::new(logger.clone()));

        let recognizer = Recognizer::new(
            logger.clone(),
            device_camera.clone(),
            device_shutter.clone(),
            device_display.clone(),
            image_classifier.clone(),
        );

        Self {
            config,
            logger,
            device_camera,
            device_shutter,
            device_display,
            image_classifier,
            recognizer,
        }
    }
}
