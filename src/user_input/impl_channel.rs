use crate::user_input::interface::{UserInput, UserInputEvent};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Events come from whoever holds the sender: the GUI window, or a test.
/// Only the first call to `events` gets the live receiver.
pub struct UserInputChannel {
    receiver: Mutex<Option<Receiver<UserInputEvent>>>,
}

impl UserInputChannel {
    pub fn new() -> (Sender<UserInputEvent>, Self) {
        let (tx, rx) = channel();
        (
            tx,
            Self {
                receiver: Mutex::new(Some(rx)),
            },
        )
    }
}

impl UserInput for UserInputChannel {
    fn events(&self) -> Receiver<UserInputEvent> {
        let taken = self.receiver.lock().ok().and_then(|mut r| r.take());
        match taken {
            Some(rx) => rx,
            None => channel().1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwards_sent_events() {
        let (tx, input) = UserInputChannel::new();
        let events = input.events();

        tx.send(UserInputEvent::Gallery).unwrap();
        tx.send(UserInputEvent::Quit).unwrap();

        assert_eq!(events.recv().unwrap(), UserInputEvent::Gallery);
        assert_eq!(events.recv().unwrap(), UserInputEvent::Quit);
    }

    #[test]
    fn test_second_subscription_is_closed() {
        let (_tx, input) = UserInputChannel::new();
        let _first = input.events();

        assert!(input.events().recv().is_err());
    }
}
