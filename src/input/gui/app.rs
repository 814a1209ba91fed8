//! Main GUI application loop.

use crate::adapters::pacing::FixedRatePacer;
use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::interactive::host::HostContext;
use crate::controllers::interactive::session::{Session, TickOutcome};
use crate::input::gui::events::GuiInput;
use crate::presenters::pixels::canvas::{PixelsCanvas, PixelsCanvasError};
use std::error::Error;
use std::fmt;
use tracing::{error, info};
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::Event;
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

#[derive(Debug)]
pub enum GuiError {
    Config(ConfigError),
    EventLoop(EventLoopError),
    Window(OsError),
    Canvas(PixelsCanvasError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Canvas(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<ConfigError> for GuiError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<PixelsCanvasError> for GuiError {
    fn from(err: PixelsCanvasError) -> Self {
        Self::Canvas(err)
    }
}

/// Opens a fixed-size window and runs the explorer until it is closed.
pub fn run_gui(config: &ExplorerConfig) -> Result<(), GuiError> {
    let mut session = Session::new(config)?;
    let pacer = FixedRatePacer::new(config.tick_interval()?);

    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractals")
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let canvas = PixelsCanvas::new(window)?;
    let mut host = HostContext::new(canvas, GuiInput::default(), pacer);
    let mut failure = None;

    info!(width = config.width, height = config.height, "window opened");

    event_loop.run(|event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => {
                host.input.handle_window_event(&event, &host.render_target);
            }
            Event::AboutToWait => match host.tick(&mut session) {
                Ok(TickOutcome::Continue) => {}
                Ok(TickOutcome::Quit) => elwt.exit(),
                Err(err) => {
                    error!(error = %err, "frame presentation failed");
                    failure = Some(err);
                    elwt.exit();
                }
            },
            _ => {}
        }
    })?;

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
