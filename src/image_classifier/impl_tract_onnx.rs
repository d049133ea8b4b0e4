use crate::image_classifier::interface::{ClassifierOutput, Classification, ImageClassifier};
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tract::image::load_image_tensor;
use crate::image_classifier::tract::output::{scores_to_classification, softmax};
use crate::image_ref::ImageRef;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use std::time::Instant;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("image_classifier").with_namespace("tract");
        let (height, width) = config.input_shape;

        logger.info(&format!("Loading model {}", config.onnx_model_path))?;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
            .into_optimized()?
            .into_runnable()?;

        logger.info("Model loaded")?;

        Ok(Self {
            model,
            config,
            logger,
        })
    }

    fn to_classifications(
        &self,
        outputs: TVec<TValue>,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let mut classifications = Vec::new();

        for (head_index, output) in outputs.iter().enumerate() {
            let view = output.to_array_view::<f32>()?;
            let raw: Vec<f32> = view.iter().cloned().collect();
            let scores = if self.config.apply_softmax {
                softmax(&raw)
            } else {
                raw
            };

            classifications.push(scores_to_classification(
                head_index,
                &scores,
                &self.config.labels,
                self.config.score_threshold,
                self.config.max_results,
            ));
        }

        Ok(classifications)
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(
        &self,
        image: &ImageRef,
    ) -> Result<ClassifierOutput, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.config.input_shape;
        let input = load_image_tensor(image.path(), width, height)?;

        let started = Instant::now();
        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let inference_time_ms = started.elapsed().as_millis() as u64;

        let classifications = if outputs.is_empty() {
            None
        } else {
            Some(self.to_classifications(outputs)?)
        };

        self.logger.info(&format!(
            "Classified {} in {}ms: {:?}",
            image, inference_time_ms, classifications
        ))?;

        Ok(ClassifierOutput {
            classifications,
            inference_time_ms,
        })
    }
}
