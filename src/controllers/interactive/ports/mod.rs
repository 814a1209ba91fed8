//! Port definitions for the interactive controller.
//!
//! The session never talks to a window system directly. Hosts implement these
//! traits and hand them to [`run_session`](super::host::run_session) through a
//! [`HostContext`](super::host::HostContext).

pub mod frame_pacer;
pub mod input_source;
pub mod render_target;

pub use frame_pacer::FramePacer;
pub use input_source::InputSource;
pub use render_target::{RenderTarget, TextExtent};
