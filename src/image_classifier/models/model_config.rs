use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    /// (height, width)
    pub input_shape: (u32, u32),
    /// Label for each output index. Indices past the end fall back to the
    /// index itself.
    pub labels: Vec<String>,
    /// Set when the model emits logits rather than probabilities.
    pub apply_softmax: bool,
    /// Categories scoring at or below this are not reported at all.
    pub score_threshold: f32,
    pub max_results: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: "./models/cancer_classification.onnx".to_string(),
            input_shape: (224, 224),
            labels: vec!["Cancer".to_string(), "Non Cancer".to_string()],
            apply_softmax: false,
            score_threshold: 0.1,
            max_results: 3,
        }
    }
}
