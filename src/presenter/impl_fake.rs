use crate::presenter::interface::{Presenter, Screen};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records what would have been shown. Clones share the same history.
#[derive(Clone, Default)]
pub struct PresenterFake {
    screens: Arc<Mutex<Vec<Screen>>>,
    toasts: Arc<Mutex<Vec<String>>>,
}

impl PresenterFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.screens.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn toasts(&self) -> Vec<String> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Presenter for PresenterFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn render(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.screens
            .lock()
            .map_err(|e| e.to_string())?
            .push(screen.clone());
        Ok(())
    }

    fn show_toast(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.toasts
            .lock()
            .map_err(|e| e.to_string())?
            .push(message.to_string());
        Ok(())
    }
}
