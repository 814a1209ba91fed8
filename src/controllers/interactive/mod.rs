//! Interactive explorer session.
//!
//! The [`Session`] owns all explorer state and advances it one tick at a time.
//! Rendering and input reach it only through the traits in [`ports`], so the
//! same session runs in a window or headlessly in tests.

pub mod events;
pub mod host;
pub mod overlay;
pub mod ports;
pub mod session;

pub use events::input::{InputEvent, PointerButton};
pub use host::{HostContext, run_session};
pub use session::{Session, TickOutcome};
