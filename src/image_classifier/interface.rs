use crate::image_ref::ImageRef;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub label: String,
    pub score: f32,
}

impl Category {
    pub fn new(label: &str, score: f32) -> Self {
        Self {
            label: label.to_string(),
            score,
        }
    }
}

/// Scored labels produced by one model head for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub head_index: usize,
    pub head_name: Option<String>,
    pub categories: Vec<Category>,
}

impl Classification {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            head_index: 0,
            head_name: None,
            categories,
        }
    }
}

/// `classifications` is `None` when the model ran but produced nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierOutput {
    pub classifications: Option<Vec<Classification>>,
    pub inference_time_ms: u64,
}

pub trait ImageClassifier {
    fn classify(
        &self,
        image: &ImageRef,
    ) -> Result<ClassifierOutput, Box<dyn std::error::Error + Send + Sync>>;
}
