use crate::analyzer::core::State;
use crate::presenter::interface::{Presenter, Screen};
use std::sync::{Arc, Mutex};

pub fn screen_for(state: &State) -> Screen {
    match state {
        State::NoImage | State::Picking | State::Exiting => Screen::default(),
        State::Cropping { source } => Screen::Main {
            preview: Some(source.clone()),
            analyze_visible: false,
            progress_visible: false,
        },
        State::ImageReady { image } => Screen::Main {
            preview: Some(image.clone()),
            analyze_visible: true,
            progress_visible: false,
        },
        State::Analyzing { request } => Screen::Main {
            preview: Some(request.image.clone()),
            analyze_visible: false,
            progress_visible: true,
        },
        State::ShowingResult { image, text } => Screen::Result {
            image: image.clone(),
            text: text.clone(),
        },
    }
}

#[derive(Clone)]
pub struct Render {
    presenter: Arc<Mutex<dyn Presenter + Send + Sync>>,
}

impl Render {
    pub fn new(presenter: Arc<Mutex<dyn Presenter + Send + Sync>>) -> Self {
        Self { presenter }
    }

    pub fn init(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.presenter.lock().map_err(|e| e.to_string())?.init()
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.presenter
            .lock()
            .map_err(|e| e.to_string())?
            .render(&screen_for(state))
    }

    pub fn toast(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.presenter
            .lock()
            .map_err(|e| e.to_string())?
            .show_toast(message)
    }

    pub fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.presenter.lock().map_err(|e| e.to_string())?.close()
    }
}
