use crate::controllers::interactive::events::input::{InputEvent, PointerButton};
use crate::controllers::interactive::ports::input_source::InputSource;
use crate::core::data::point::Point;
use crate::presenters::pixels::canvas::PixelsCanvas;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

#[must_use]
pub fn map_mouse_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Other(2),
        MouseButton::Back => PointerButton::Other(8),
        MouseButton::Forward => PointerButton::Other(9),
        MouseButton::Other(code) => PointerButton::Other(code),
    }
}

/// Scrolling away from the user zooms in, towards the user zooms out.
#[must_use]
pub fn wheel_button(delta: MouseScrollDelta) -> Option<PointerButton> {
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if dy > 0.0 {
        Some(PointerButton::WheelUp)
    } else if dy < 0.0 {
        Some(PointerButton::WheelDown)
    } else {
        None
    }
}

/// Buffers translated winit events until the next tick drains them.
#[derive(Debug, Default)]
pub struct GuiInput {
    pointer: Point,
    pending: Vec<InputEvent>,
}

impl GuiInput {
    pub fn handle_window_event(&mut self, event: &WindowEvent, canvas: &PixelsCanvas) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.pending.push(InputEvent::Quit);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = canvas.window_pos_to_pixel(position.x, position.y);
                self.pending
                    .push(InputEvent::PointerMoved(self.pointer.x, self.pointer.y));
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                self.pending.push(InputEvent::ButtonPressed(
                    map_mouse_button(*button),
                    self.pointer.x,
                    self.pointer.y,
                ));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(button) = wheel_button(*delta) {
                    self.pending
                        .push(InputEvent::ButtonPressed(button, self.pointer.x, self.pointer.y));
                }
            }
            _ => {}
        }
    }
}

impl InputSource for GuiInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_map_mouse_button() {
        assert_eq!(map_mouse_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(map_mouse_button(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(map_mouse_button(MouseButton::Middle), PointerButton::Other(2));
        assert_eq!(map_mouse_button(MouseButton::Other(12)), PointerButton::Other(12));
    }

    #[test]
    fn test_wheel_direction() {
        assert_eq!(
            wheel_button(MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(PointerButton::WheelUp)
        );
        assert_eq!(
            wheel_button(MouseScrollDelta::LineDelta(0.0, -3.0)),
            Some(PointerButton::WheelDown)
        );
        assert_eq!(
            wheel_button(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.5))),
            Some(PointerButton::WheelUp)
        );
        assert_eq!(wheel_button(MouseScrollDelta::LineDelta(4.0, 0.0)), None);
    }

    #[test]
    fn test_poll_drains_pending() {
        let mut input = GuiInput::default();
        input.pending.push(InputEvent::Quit);

        assert_eq!(input.poll_events(), vec![InputEvent::Quit]);
        assert!(input.poll_events().is_empty());
    }
}
