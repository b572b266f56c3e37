use std::path::PathBuf;

/// An ImageNet-style classification network: one output row of class
/// scores, class index resolved to a human label via the labels file
/// (one label per line).
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    /// (height, width) of the model input.
    pub input_shape: (u32, u32),
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("models/mobilenetv2-7.onnx"),
            labels_path: PathBuf::from("models/imagenet_labels.txt"),
            input_shape: (224, 224),
        }
    }
}
