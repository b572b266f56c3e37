use crate::error::AppError;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::{Arc, Mutex};
use tract_onnx::prelude::*;

type RunnableModel = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

struct LoadedModel {
    plan: RunnableModel,
    labels: Vec<String>,
}

/// ImageNet-style classifier on top of tract-onnx. The model and labels
/// file load once via `load`; until then `classify` refuses to run.
pub struct ImageClassifierTract {
    config: ModelConfig,
    logger: Arc<dyn Logger>,
    loaded: Mutex<Option<LoadedModel>>,
}

impl ImageClassifierTract {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger>) -> Self {
        Self {
            config,
            logger: logger.with_namespace("image_classifier").with_namespace("tract"),
            loaded: Mutex::new(None),
        }
    }
}

impl ImageClassifier for ImageClassifierTract {
    fn load(&self) -> Result<(), AppError> {
        let _ = self.logger.info(&format!(
            "Loading model from {}...",
            self.config.onnx_model_path.display()
        ));

        let labels_raw = std::fs::read_to_string(&self.config.labels_path)
            .map_err(|e| AppError::ModelLoad(format!("labels file: {}", e)))?;
        let labels: Vec<String> = labels_raw
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        if labels.is_empty() {
            return Err(AppError::ModelLoad("labels file is empty".to_string()));
        }

        let plan = tract_onnx::onnx()
            .model_for_path(&self.config.onnx_model_path)
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| AppError::ModelLoad(e.to_string()))?;

        *self.loaded.lock().unwrap() = Some(LoadedModel { plan, labels });

        let _ = self.logger.info("Model loaded");
        Ok(())
    }

    fn classify(&self, image: &DynamicImage) -> Result<Vec<Classification>, AppError> {
        let loaded = self.loaded.lock().unwrap();
        let loaded = loaded
            .as_ref()
            .ok_or_else(|| AppError::Inference("model not loaded".to_string()))?;

        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(image, width, height);

        let outputs = loaded
            .plan
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| AppError::Inference(e.to_string()))?;
        let output = outputs
            .first()
            .ok_or(AppError::UnexpectedResultShape)?
            .to_array_view::<f32>()
            .map_err(|e| AppError::Inference(e.to_string()))?;

        let scores: Vec<f32> = output.iter().copied().collect();

        // Networks with a background class output labels.len() + 1 scores.
        let offset = if scores.len() == loaded.labels.len() + 1 {
            1
        } else {
            0
        };

        let mut predictions: Vec<(usize, f32)> = scores
            .into_iter()
            .enumerate()
            .skip(offset)
            .map(|(index, score)| (index - offset, score))
            .collect();

        predictions.sort_by(|a, b| b.1.total_cmp(&a.1));
        predictions.truncate(5);

        let classifications = predictions
            .into_iter()
            .filter_map(|(class_index, confidence)| {
                loaded.labels.get(class_index).map(|label| Classification {
                    label: label.clone(),
                    confidence,
                })
            })
            .collect();

        Ok(classifications)
    }
}
