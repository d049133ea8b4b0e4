use crate::image_classifier::interface::{
    Category, ClassifierOutput, Classification, ImageClassifier,
};
use crate::image_ref::ImageRef;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum FakeBehavior {
    /// Two-label output with a random split, like a binary softmax head.
    Random,
    Fixed(ClassifierOutput),
    Fail(String),
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    behavior: Mutex<FakeBehavior>,
    calls: Mutex<Vec<ImageRef>>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_behavior(logger, FakeBehavior::Random)
    }

    pub fn with_behavior(logger: Arc<dyn Logger + Send + Sync>, behavior: FakeBehavior) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            behavior: Mutex::new(behavior),
            calls: Mutex::new(vec![]),
        }
    }

    #[allow(dead_code)]
    pub fn set_behavior(&self, behavior: FakeBehavior) {
        if let Ok(mut current) = self.behavior.lock() {
            *current = behavior;
        }
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<ImageRef> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn random_output() -> Result<ClassifierOutput, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let score_dist = Uniform::new(0.0f32, 1.0)?;
        let time_dist = Uniform::new(5u64, 80)?;

        let cancer = score_dist.sample(&mut rng);
        let mut categories = vec![
            Category::new("Cancer", cancer),
            Category::new("Non Cancer", 1.0 - cancer),
        ];
        categories.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(ClassifierOutput {
            classifications: Some(vec![Classification::new(categories)]),
            inference_time_ms: time_dist.sample(&mut rng),
        })
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        image: &ImageRef,
    ) -> Result<ClassifierOutput, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Classifying {}", image))?;
        self.calls.lock().map_err(|e| e.to_string())?.push(image.clone());

        let behavior = self.behavior.lock().map_err(|e| e.to_string())?.clone();
        match behavior {
            FakeBehavior::Random => Self::random_output(),
            FakeBehavior::Fixed(output) => Ok(output),
            FakeBehavior::Fail(message) => Err(message.into()),
        }
    }
}
