use crate::image_classifier::models::model_config::ModelConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
