use crate::controllers::interactive::events::input::InputEvent;
use crate::controllers::interactive::ports::input_source::InputSource;
use std::collections::VecDeque;

/// Replays a fixed list of per-tick event batches, then reports [`InputEvent::Quit`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.batches
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
