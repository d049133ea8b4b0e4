use crate::image_ref::ImageRef;
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Main {
        /// `None` shows the placeholder.
        preview: Option<ImageRef>,
        analyze_visible: bool,
        progress_visible: bool,
    },
    Result {
        image: ImageRef,
        text: String,
    },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Main {
            preview: None,
            analyze_visible: false,
            progress_visible: false,
        }
    }
}

/// Surface the app draws on: a main screen with preview, a result screen,
/// and short-lived toast messages.
pub trait Presenter: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Called after every state change. Implementations may skip redraws
    /// when the screen is unchanged.
    fn render(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show_toast(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn close(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }
}
