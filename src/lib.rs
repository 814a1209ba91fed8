pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use config::{ConfigError, ExplorerConfig};
pub use controllers::cli::{CliRenderController, CliRenderError, NavigationScript};
pub use controllers::interactive::{InputEvent, PointerButton, Session, TickOutcome};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
