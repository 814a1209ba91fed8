use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::interactive::events::input::{InputEvent, PointerButton};
use crate::controllers::interactive::ports::input_source::InputSource;
use crate::controllers::interactive::session::{Session, TickOutcome};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::input::scripted::ScriptedInput;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub enum CliRenderError {
    Config(ConfigError),
    NothingRendered,
    Io(std::io::Error),
}

impl fmt::Display for CliRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::NothingRendered => write!(f, "no raster has been rendered yet"),
            Self::Io(err) => write!(f, "failed to write output: {}", err),
        }
    }
}

impl Error for CliRenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::NothingRendered => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliRenderError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for CliRenderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Navigation to replay before the final render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationScript {
    /// Wheel-up positions, applied in order.
    pub zoom_in_at: Vec<Point>,
    /// Wheel-down presses applied after all zoom-ins.
    pub zoom_outs: u32,
}

impl NavigationScript {
    fn into_input(self) -> ScriptedInput {
        let zoom_ins = self
            .zoom_in_at
            .into_iter()
            .map(|p| vec![InputEvent::ButtonPressed(PointerButton::WheelUp, p.x, p.y)]);
        let zoom_outs = (0..self.zoom_outs)
            .map(|_| vec![InputEvent::ButtonPressed(PointerButton::WheelDown, 0, 0)]);

        ScriptedInput::new(zoom_ins.chain(zoom_outs).collect())
    }
}

/// Renders headlessly by driving a real [`Session`], feeding one scripted
/// event each time the session goes idle.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    raster: Option<Arc<Raster>>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            raster: None,
        }
    }

    #[must_use]
    pub fn raster(&self) -> Option<&Arc<Raster>> {
        self.raster.as_ref()
    }

    pub fn generate(
        &mut self,
        config: &ExplorerConfig,
        script: NavigationScript,
    ) -> Result<(), CliRenderError> {
        let start = Instant::now();
        let mut session = Session::new(config)?;
        let mut input = script.into_input();
        let mut ticks: u64 = 0;

        loop {
            while session.is_busy() {
                session.tick(&[]);
                ticks += 1;
            }

            let events = input.poll_events();
            ticks += 1;

            if session.tick(&events) == TickOutcome::Quit {
                break;
            }
        }

        let top = session.stack().top();
        info!(
            kind = %session.kind(),
            depth = session.stack().len(),
            center_x = top.center_x(),
            center_y = top.center_y(),
            pixel_scale = top.pixel_scale(),
            ticks,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "render finished"
        );

        self.raster = Some(
            session
                .last_completed()
                .cloned()
                .ok_or(CliRenderError::NothingRendered)?,
        );

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), CliRenderError> {
        let raster = self.raster.as_ref().ok_or(CliRenderError::NothingRendered)?;

        self.presenter.present(raster, filepath)?;

        Ok(())
    }
}
