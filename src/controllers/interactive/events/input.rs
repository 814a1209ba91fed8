use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    WheelUp,
    WheelDown,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerMoved(i32, i32),
    ButtonPressed(PointerButton, i32, i32),
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Quit => None,
            Self::PointerMoved(x, y) | Self::ButtonPressed(_, x, y) => Some(Point { x, y }),
        }
    }
}
