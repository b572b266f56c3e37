use crate::error::AppError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Answers with a random food label so the whole flow can run without a
/// model file on disk.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn load(&self) -> Result<(), AppError> {
        let _ = self.logger.info("Pretending to load a model...");
        std::thread::sleep(std::time::Duration::from_millis(300));
        let _ = self.logger.info("Fake model loaded");
        Ok(())
    }

    fn classify(&self, _image: &DynamicImage) -> Result<Vec<Classification>, AppError> {
        let _ = self.logger.info("Classifying image with fake classifier...");

        let labels = [
            "hotdog, hot dog, red hot",
            "cheeseburger",
            "pizza, pizza pie",
            "bagel, beigel",
            "pretzel",
            "french loaf",
            "ice cream, icecream",
            "burrito",
        ];

        let mut rng = rand::rng();
        let index_dist =
            Uniform::new(0, labels.len()).map_err(|e| AppError::Inference(e.to_string()))?;
        let confidence_dist =
            Uniform::new(0.5f32, 1.0).map_err(|e| AppError::Inference(e.to_string()))?;

        let top = Classification {
            label: labels[index_dist.sample(&mut rng)].to_string(),
            confidence: confidence_dist.sample(&mut rng),
        };
        let runner_up = Classification {
            label: labels[index_dist.sample(&mut rng)].to_string(),
            confidence: top.confidence / 2.0,
        };

        Ok(vec![top, runner_up])
    }
}
