use crate::presenter::interface::{Presenter, Screen};
use std::error::Error;

pub struct PresenterConsole {
    last_screen: Option<Screen>,
}

impl PresenterConsole {
    pub fn new() -> Self {
        Self { last_screen: None }
    }

    pub fn draw(screen: &Screen) -> String {
        let mut out = String::new();
        match screen {
            Screen::Main {
                preview,
                analyze_visible,
                progress_visible,
            } => {
                out.push_str("┌──────────── Asclepius ────────────┐\n");
                match preview {
                    Some(image) => out.push_str(&format!("  Preview: {}\n", image)),
                    None => out.push_str("  Preview: [no image]\n"),
                }
                if *progress_visible {
                    out.push_str("  Analyzing...\n");
                }
                out.push_str("  [g] Gallery");
                if *analyze_visible {
                    out.push_str("   [a] Analyze");
                }
                out.push_str("   [q] Quit\n");
                out.push_str("└───────────────────────────────────┘");
            }
            Screen::Result { image, text } => {
                out.push_str("┌───────────── Result ──────────────┐\n");
                out.push_str(&format!("  Image: {}\n\n", image));
                for line in text.lines() {
                    out.push_str(&format!("  {}\n", line));
                }
                out.push_str("\n  [b] Back   [g] Gallery   [q] Quit\n");
                out.push_str("└───────────────────────────────────┘");
            }
        }
        out
    }
}

impl Presenter for PresenterConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render(&Screen::default())
    }

    fn render(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.last_screen.as_ref() == Some(screen) {
            return Ok(());
        }
        println!("{}", Self::draw(screen));
        self.last_screen = Some(screen.clone());
        Ok(())
    }

    fn show_toast(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!(">> {}", message);
        Ok(())
    }
}
