use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::device_shutter::interface::DeviceShutter;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::recognizer::core::{init, transition, Effect, Event};
use crate::recognizer::render::Render;
use crate::recognizer::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};

pub struct Recognizer {
    logger: Arc<dyn Logger>,
    render: Render,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
}

impl Recognizer {
    pub fn new(
        logger: Arc<dyn Logger>,
        device_camera: Arc<dyn DeviceCamera>,
        device_shutter: Arc<dyn DeviceShutter>,
        device_display: Arc<Mutex<dyn DeviceDisplay>>,
        image_classifier: Arc<dyn ImageClassifier>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        let render = Render::new(device_display, device_shutter.clone());
        let run_effect = RunEffect::new(
            logger.clone(),
            device_camera,
            device_shutter,
            image_classifier,
            event_sender,
        );

        Self {
            logger: logger.with_namespace("recognizer"),
            render,
            run_effect,
            event_receiver,
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut model, effects) = init();

        self.render.render(&model)?;
        self.spawn_effects(effects);

        loop {
            let event = self.event_receiver.recv()?;

            let _ = self
                .logger
                .info(&format!("Event: {}", event.to_display_string()));

            let (new_model, effects) = transition(model, event);

            let _ = self.logger.info(&format!(
                "Model: {}, effects: {:?}",
                new_model.to_display_string(),
                effects
            ));

            self.render.render(&new_model)?;
            self.spawn_effects(effects);

            model = new_model;
        }
    }
}
