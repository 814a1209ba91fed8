use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::interactive::events::input::{InputEvent, PointerButton};
use crate::core::actions::fractal_job::{FractalJob, JobStatus};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::menu::{MenuLayout, MenuState};
use crate::core::navigation::viewport_stack::ViewportStack;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Interactive explorer state: zoom history, context menu and the one live job.
///
/// A session is driven entirely by [`Session::tick`]. While a job is running
/// every input other than [`InputEvent::Quit`] is dropped, so the view can only
/// change between renders.
#[derive(Debug)]
pub struct Session {
    bounds: PixelRect,
    max_iterations: NonZeroU32,
    quantum: u64,
    menu_layout: MenuLayout,
    show_partial_raster: bool,
    kind: FractalKind,
    stack: ViewportStack,
    menu: MenuState,
    job: Option<FractalJob>,
    last_completed: Option<Arc<Raster>>,
}

impl Session {
    /// Builds a session and starts rendering `config.initial_kind` at the default viewport.
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = config.bounds()?;
        let initial_viewport = config.initial_viewport()?;

        let mut session = Self {
            bounds,
            max_iterations: config.iteration_limit()?,
            quantum: config.quantum,
            menu_layout: config.menu_layout()?,
            show_partial_raster: config.show_partial_raster,
            kind: config.initial_kind,
            stack: ViewportStack::new(initial_viewport, bounds),
            menu: MenuState::Closed,
            job: None,
            last_completed: None,
        };

        info!(
            width = bounds.width(),
            height = bounds.height(),
            kind = %session.kind,
            quantum = session.quantum,
            "session started"
        );

        session.start_job();

        Ok(session)
    }

    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn stack(&self) -> &ViewportStack {
        &self.stack
    }

    #[must_use]
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    #[must_use]
    pub fn job(&self) -> Option<&FractalJob> {
        self.job.as_ref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.job.is_some()
    }

    #[must_use]
    pub fn last_completed(&self) -> Option<&Arc<Raster>> {
        self.last_completed.as_ref()
    }

    #[must_use]
    pub fn show_partial_raster(&self) -> bool {
        self.show_partial_raster
    }

    /// Status line shown while a job runs, e.g. `Julia fractal: 42.5% complete...`.
    #[must_use]
    pub fn progress_message(&self) -> Option<String> {
        self.job.as_ref().map(|job| {
            format!(
                "{} fractal: {:.1}% complete...",
                job.kind().display_name(),
                job.progress() * 100.0
            )
        })
    }

    /// Applies `events` in order, then advances the live job by one quantum.
    pub fn tick(&mut self, events: &[InputEvent]) -> TickOutcome {
        for event in events {
            if self.handle_event(*event) == TickOutcome::Quit {
                info!("quit requested");
                return TickOutcome::Quit;
            }
        }

        if let Some(job) = self.job.as_mut() {
            match job.advance(self.quantum) {
                Ok(JobStatus::InProgress(_)) => {}
                Ok(JobStatus::Complete(raster)) => {
                    self.last_completed = Some(raster);
                    self.job = None;
                }
                Err(err) => {
                    error!(error = %err, kind = %job.kind(), "fractal job abandoned");
                    self.job = None;
                }
            }
        }

        TickOutcome::Continue
    }

    fn handle_event(&mut self, event: InputEvent) -> TickOutcome {
        match event {
            InputEvent::Quit => return TickOutcome::Quit,
            _ if self.job.is_some() => trace!(?event, "input ignored while rendering"),
            InputEvent::PointerMoved(x, y) => self.menu.pointer_moved(Point { x, y }),
            InputEvent::ButtonPressed(button, x, y) => self.handle_button(button, Point { x, y }),
        }

        TickOutcome::Continue
    }

    fn handle_button(&mut self, button: PointerButton, pos: Point) {
        match button {
            PointerButton::Secondary => {
                if let Err(err) = self.menu.secondary_trigger(pos, &self.menu_layout) {
                    warn!(error = %err, "menu could not be opened");
                }
            }
            PointerButton::Primary => {
                if let Some(kind) = self.menu.primary_trigger(pos) {
                    self.kind = kind;
                    self.start_job();
                }
            }
            PointerButton::WheelUp | PointerButton::WheelDown if self.menu.is_open() => {
                trace!(?button, "wheel ignored while the menu is open");
            }
            PointerButton::WheelUp => match self.stack.zoom_in(pos) {
                Ok(_) => self.start_job(),
                Err(err) => warn!(error = %err, "zoom in rejected"),
            },
            PointerButton::WheelDown => {
                if self.stack.is_at_floor() {
                    debug!("already at the initial viewport");
                    return;
                }

                self.stack.zoom_out();
                self.start_job();
            }
            PointerButton::Other(code) => trace!(code, "unmapped button ignored"),
        }
    }

    fn start_job(&mut self) {
        if let Some(previous) = self.job.take() {
            debug!(
                kind = %previous.kind(),
                pixels_done = previous.pixels_done(),
                "fractal job superseded"
            );
        }

        self.job = Some(FractalJob::start(
            self.kind,
            self.stack.top(),
            self.bounds,
            self.max_iterations,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            width: 120,
            height: 85,
            pixel_scale: 0.03,
            quantum: 1000,
            menu_item_width: 60,
            menu_item_height: 16,
            ..ExplorerConfig::default()
        }
    }

    fn create_session() -> Session {
        Session::new(&small_config()).unwrap()
    }

    fn run_until_idle(session: &mut Session) {
        while session.is_busy() {
            assert_eq!(session.tick(&[]), TickOutcome::Continue);
        }
    }

    fn idle_session() -> Session {
        let mut session = create_session();
        run_until_idle(&mut session);
        session
    }

    fn press(button: PointerButton, x: i32, y: i32) -> InputEvent {
        InputEvent::ButtonPressed(button, x, y)
    }

    #[test]
    fn test_new_starts_initial_job() {
        let session = create_session();

        assert!(session.is_busy());
        assert_eq!(session.kind(), FractalKind::Mandelbrot);
        assert_eq!(session.stack().len(), 1);
        assert!(session.last_completed().is_none());
        assert_eq!(
            session.progress_message().as_deref(),
            Some("Mandelbrot fractal: 0.0% complete...")
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ExplorerConfig {
            quantum: 0,
            ..small_config()
        };

        assert_eq!(Session::new(&config).unwrap_err(), ConfigError::ZeroQuantum);
    }

    #[test]
    fn test_tick_advances_one_quantum() {
        let mut session = create_session();

        session.tick(&[]);

        assert_eq!(session.job().unwrap().pixels_done(), 1000);
        assert_eq!(
            session.progress_message().as_deref(),
            Some("Mandelbrot fractal: 9.8% complete...")
        );
    }

    #[test]
    fn test_completion_stores_raster_and_clears_job() {
        let session = idle_session();

        assert!(!session.is_busy());
        assert!(session.progress_message().is_none());
        let raster = session.last_completed().unwrap();
        assert_eq!(raster.width(), 120);
        assert_eq!(raster.height(), 85);
    }

    #[test]
    fn test_quit_is_honoured_while_rendering() {
        let mut session = create_session();

        let outcome = session.tick(&[InputEvent::PointerMoved(1, 1), InputEvent::Quit]);

        assert_eq!(outcome, TickOutcome::Quit);
        assert_eq!(session.job().unwrap().pixels_done(), 0);
    }

    #[test]
    fn test_input_ignored_while_rendering() {
        let mut session = create_session();

        session.tick(&[
            press(PointerButton::WheelUp, 60, 42),
            press(PointerButton::Secondary, 10, 10),
        ]);

        assert_eq!(session.stack().len(), 1);
        assert!(!session.menu().is_open());
    }

    #[test]
    fn test_input_after_completion_in_same_batch_is_still_ignored() {
        let config = ExplorerConfig {
            quantum: 120 * 85,
            ..small_config()
        };
        let mut session = Session::new(&config).unwrap();

        // The job finishes during this tick, after the batch was handled.
        session.tick(&[press(PointerButton::WheelUp, 60, 42)]);

        assert!(!session.is_busy());
        assert_eq!(session.stack().len(), 1);
    }

    #[test]
    fn test_wheel_up_zooms_and_rerenders() {
        let mut session = idle_session();
        let before = session.last_completed().cloned();

        session.tick(&[press(PointerButton::WheelUp, 60, 42)]);

        assert_eq!(session.stack().len(), 2);
        assert_eq!(
            session.stack().top(),
            Viewport::new(0.0, 0.0, 0.015).unwrap()
        );
        assert!(session.is_busy());
        assert_eq!(session.last_completed().cloned(), before);
    }

    #[test]
    fn test_wheel_down_restores_previous_viewport() {
        let mut session = idle_session();
        let initial = session.stack().top();

        session.tick(&[press(PointerButton::WheelUp, 10, 70)]);
        run_until_idle(&mut session);
        session.tick(&[press(PointerButton::WheelDown, 0, 0)]);

        assert_eq!(session.stack().len(), 1);
        assert_eq!(session.stack().top(), initial);
        assert!(session.is_busy());
    }

    #[test]
    fn test_wheel_down_at_floor_is_silent_noop() {
        let mut session = idle_session();
        let raster = session.last_completed().cloned().unwrap();

        session.tick(&[press(PointerButton::WheelDown, 5, 5)]);

        assert!(!session.is_busy());
        assert_eq!(session.stack().len(), 1);
        assert!(Arc::ptr_eq(session.last_completed().unwrap(), &raster));
    }

    #[test]
    fn test_menu_selection_switches_kind_at_current_viewport() {
        let mut session = idle_session();
        session.tick(&[press(PointerButton::WheelUp, 30, 30)]);
        run_until_idle(&mut session);
        let zoomed = session.stack().top();

        session.tick(&[press(PointerButton::Secondary, 10, 10)]);
        assert!(session.menu().is_open());

        // Second item spans y in 26..=41.
        session.tick(&[press(PointerButton::Primary, 20, 30)]);

        assert!(!session.menu().is_open());
        assert_eq!(session.kind(), FractalKind::Julia);
        let job = session.job().unwrap();
        assert_eq!(job.kind(), FractalKind::Julia);
        assert_eq!(job.viewport(), zoomed);
        assert_eq!(session.stack().len(), 2);
    }

    #[test]
    fn test_menu_dismiss_outside_items_keeps_state() {
        let mut session = idle_session();

        session.tick(&[
            press(PointerButton::Secondary, 10, 10),
            press(PointerButton::Primary, 110, 80),
        ]);

        assert!(!session.menu().is_open());
        assert!(!session.is_busy());
        assert_eq!(session.kind(), FractalKind::Mandelbrot);
    }

    #[test]
    fn test_wheel_ignored_while_menu_open() {
        let mut session = idle_session();

        session.tick(&[
            press(PointerButton::Secondary, 10, 10),
            press(PointerButton::WheelUp, 60, 42),
        ]);

        assert!(session.menu().is_open());
        assert_eq!(session.stack().len(), 1);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_primary_with_menu_closed_does_nothing() {
        let mut session = idle_session();

        session.tick(&[press(PointerButton::Primary, 60, 42)]);

        assert!(!session.is_busy());
        assert_eq!(session.stack().len(), 1);
    }

    #[test]
    fn test_pointer_moves_update_hover() {
        let mut session = idle_session();

        session.tick(&[
            press(PointerButton::Secondary, 10, 10),
            InputEvent::PointerMoved(20, 30),
        ]);

        assert!(matches!(
            session.menu(),
            MenuState::Open(menu) if menu.hovered_index == Some(1)
        ));
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut session = idle_session();

        session.tick(&[press(PointerButton::Other(8), 60, 42)]);

        assert!(!session.is_busy());
        assert!(!session.menu().is_open());
    }
}
