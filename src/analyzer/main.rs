use crate::analyzer::core::{init, transition, Effect, Event, Model};
use crate::analyzer::render::Render;
use crate::analyzer::run_effect::RunEffect;
use crate::config::Config;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_cropper::interface::ImageCropper;
use crate::image_picker::interface::ImagePicker;
use crate::library::logger::interface::Logger;
use crate::presenter::interface::Presenter;
use crate::user_input::interface::UserInput;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};

pub struct Analyzer {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    render: Render,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
}

impl Analyzer {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        user_input: Arc<dyn UserInput + Send + Sync>,
        image_picker: Arc<dyn ImagePicker + Send + Sync>,
        image_cropper: Arc<dyn ImageCropper + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        presenter: Arc<Mutex<dyn Presenter + Send + Sync>>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let logger = logger.with_namespace("analyzer");

        Self {
            config,
            render: Render::new(presenter),
            run_effect: RunEffect::new(
                logger.clone(),
                user_input,
                image_picker,
                image_cropper,
                image_classifier,
                event_sender,
            ),
            logger,
            event_receiver,
        }
    }

    /// Runs until an `Exit` effect. Returns the final model.
    pub fn run(&self) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init(&self.config);

        self.render.init()?;
        self.render.render(&current_model.state)?;
        if self.execute_effects(effects)? {
            return Ok(current_model);
        }

        loop {
            let event = self.event_receiver.recv()?;

            self.logger.info(&format!(
                "\nold state:\n\t{:?}\n\nevent:\n\t{:?}",
                current_model.state, event,
            ))?;

            let (new_model, effects) = transition(&self.config, current_model, event);

            self.logger.info(&format!(
                "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
                new_model.state, effects
            ))?;

            current_model = new_model;

            self.render.render(&current_model.state)?;

            if self.execute_effects(effects)? {
                return Ok(current_model);
            }
        }
    }

    /// Presentation effects run here in order; the rest go to threads.
    /// Returns true once `Exit` has been handled.
    fn execute_effects(
        &self,
        effects: Vec<Effect>,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        for effect in effects {
            match effect {
                Effect::ShowToast { message } => self.render.toast(&message)?,
                Effect::LogInfo { message } => self.logger.info(&message)?,
                Effect::LogError { message } => self.logger.error(&message)?,
                Effect::Exit => {
                    self.render.close()?;
                    return Ok(true);
                }
                effect => {
                    let run_effect = self.run_effect.clone();
                    std::thread::spawn(move || run_effect.run_effect(effect));
                }
            }
        }
        Ok(false)
    }
}
