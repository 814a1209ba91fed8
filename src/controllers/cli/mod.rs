pub mod args;
pub mod render_controller;

pub use args::{ExplorerArgs, KindArg, parse_point};
pub use render_controller::{CliRenderController, CliRenderError, NavigationScript};
