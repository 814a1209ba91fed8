//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for the framebuffer and egui for text.

mod app;
pub mod events;

pub use app::{GuiError, run_gui};
