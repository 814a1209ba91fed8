use crate::controllers::interactive::overlay::present;
use crate::controllers::interactive::ports::{FramePacer, InputSource, RenderTarget};
use crate::controllers::interactive::session::{Session, TickOutcome};
use tracing::info;

/// The host-provided services one run loop needs.
#[derive(Debug)]
pub struct HostContext<R, I, P> {
    pub render_target: R,
    pub input: I,
    pub pacer: P,
}

impl<R, I, P> HostContext<R, I, P>
where
    R: RenderTarget,
    I: InputSource,
    P: FramePacer,
{
    pub fn new(render_target: R, input: I, pacer: P) -> Self {
        Self {
            render_target,
            input,
            pacer,
        }
    }

    /// One tick: drain input, advance the session, present, then pace.
    pub fn tick(&mut self, session: &mut Session) -> Result<TickOutcome, R::Error> {
        let events = self.input.poll_events();

        if session.tick(&events) == TickOutcome::Quit {
            return Ok(TickOutcome::Quit);
        }

        present(session, &mut self.render_target)?;
        self.pacer.wait_for_next_tick();

        Ok(TickOutcome::Continue)
    }
}

/// Ticks `session` until the input source asks to quit.
///
/// Returns the number of ticks that ran, including the one that saw the quit.
pub fn run_session<R, I, P>(
    session: &mut Session,
    host: &mut HostContext<R, I, P>,
) -> Result<u64, R::Error>
where
    R: RenderTarget,
    I: InputSource,
    P: FramePacer,
{
    let mut ticks = 0;

    loop {
        ticks += 1;

        if host.tick(session)? == TickOutcome::Quit {
            info!(ticks, "run loop finished");
            return Ok(ticks);
        }
    }
}
