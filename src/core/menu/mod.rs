pub mod menu_layout;
pub mod menu_state;

pub use menu_layout::{MenuItem, MenuLayout, MenuLayoutError};
pub use menu_state::{MenuState, OpenMenu};
