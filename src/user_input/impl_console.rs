use crate::library::logger::interface::Logger;
use crate::user_input::interface::{UserInput, UserInputEvent};
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Reads one command per line from stdin. End of input counts as quit.
pub struct UserInputConsole {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl UserInputConsole {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("user_input").with_namespace("console"),
        }
    }
}

impl UserInput for UserInputConsole {
    fn events(&self) -> Receiver<UserInputEvent> {
        let (tx, rx) = channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        let _ = logger.error(&format!("Failed to read stdin: {}", e));
                        break;
                    }
                };

                match UserInputEvent::parse(&line) {
                    Some(event) => {
                        if tx.send(event).is_err() {
                            return;
                        }
                    }
                    None if line.trim().is_empty() => {}
                    None => {
                        let _ = logger.info(&format!("Unknown command: {}", line.trim()));
                    }
                }
            }
            let _ = tx.send(UserInputEvent::Quit);
        });

        rx
    }
}
