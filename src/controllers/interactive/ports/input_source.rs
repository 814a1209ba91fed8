use crate::controllers::interactive::events::input::InputEvent;

/// Pull-based input: drained once at the start of every tick.
pub trait InputSource {
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
