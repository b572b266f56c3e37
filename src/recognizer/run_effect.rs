use crate::device_camera::interface::DeviceCamera;
use crate::device_shutter::interface::{DeviceShutter, ShutterEvent};
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::recognizer::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger>,
    device_camera: Arc<dyn DeviceCamera>,
    device_shutter: Arc<dyn DeviceShutter>,
    image_classifier: Arc<dyn ImageClassifier>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger>,
        device_camera: Arc<dyn DeviceCamera>,
        device_shutter: Arc<dyn DeviceShutter>,
        image_classifier: Arc<dyn ImageClassifier>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("run_effect"),
            device_camera,
            device_shutter,
            image_classifier,
            event_sender,
        }
    }

    /// Each effect reports back with exactly one event; the subscription
    /// effect is the one long-lived exception and feeds the loop for the
    /// life of the process.
    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeToShutterEvents => {
                let events = self.device_shutter.events();
                loop {
                    match events.recv() {
                        Ok(ShutterEvent::Pressed) => {
                            if self.event_sender.send(Event::ShutterPressed).is_err() {
                                break;
                            }
                        }
                        Ok(ShutterEvent::ResetPressed) => {
                            if self.event_sender.send(Event::ResetPressed).is_err() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
            Effect::LoadModel => {
                let loaded = self.image_classifier.load();
                let _ = self.event_sender.send(Event::ModelLoadDone(loaded));
            }
            Effect::CaptureImage => {
                let image = self.device_camera.request_image();
                let _ = self.event_sender.send(Event::CaptureDone(image));
            }
            Effect::ClassifyImage { image } => {
                let classifications = self.image_classifier.classify(&image);
                let _ = self
                    .event_sender
                    .send(Event::ClassifyDone(classifications));
            }
        }
    }
}
