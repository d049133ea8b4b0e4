#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInputEvent {
    Gallery,
    Analyze,
    Back,
    Quit,
}

impl UserInputEvent {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "g" | "gallery" => Some(UserInputEvent::Gallery),
            "a" | "analyze" => Some(UserInputEvent::Analyze),
            "b" | "back" => Some(UserInputEvent::Back),
            "q" | "quit" | "exit" => Some(UserInputEvent::Quit),
            _ => None,
        }
    }
}

pub trait UserInput {
    fn events(&self) -> std::sync::mpsc::Receiver<UserInputEvent>;
}
