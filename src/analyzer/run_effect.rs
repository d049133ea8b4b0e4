use crate::analyzer::core::{Effect, Event};
use crate::image_classifier::interface::ImageClassifier;
use crate::image_cropper::interface::ImageCropper;
use crate::image_picker::interface::ImagePicker;
use crate::library::logger::interface::Logger;
use crate::user_input::interface::UserInput;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs the slow effects. Each call happens on its own thread and reports
/// back through `event_sender`.
#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    user_input: Arc<dyn UserInput + Send + Sync>,
    image_picker: Arc<dyn ImagePicker + Send + Sync>,
    image_cropper: Arc<dyn ImageCropper + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        user_input: Arc<dyn UserInput + Send + Sync>,
        image_picker: Arc<dyn ImagePicker + Send + Sync>,
        image_cropper: Arc<dyn ImageCropper + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            user_input,
            image_picker,
            image_cropper,
            image_classifier,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeUserInput => {
                let events = self.user_input.events();
                while let Ok(event) = events.recv() {
                    if self.event_sender.send(Event::UserInput(event)).is_err() {
                        return;
                    }
                }
            }
            Effect::PickImage => {
                let picked = self.image_picker.pick().map_err(|e| e.to_string());
                let _ = self.event_sender.send(Event::PickDone(picked));
            }
            Effect::CropImage { source } => {
                let result = self
                    .image_cropper
                    .crop_square(&source)
                    .map_err(|e| e.to_string());
                let _ = self.event_sender.send(Event::CropDone { source, result });
            }
            Effect::ClassifyImage { request } => {
                let result = self
                    .image_classifier
                    .classify(&request.image)
                    .map_err(|e| e.to_string());
                let _ = self.event_sender.send(Event::ClassifyDone {
                    request_id: request.id,
                    result,
                });
            }
            // presentation and logging run on the main loop
            Effect::ShowToast { .. }
            | Effect::LogInfo { .. }
            | Effect::LogError { .. }
            | Effect::Exit => {}
        }
    }
}
