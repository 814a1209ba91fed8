pub mod actions;
pub mod data;
pub mod fractals;
pub mod menu;
pub mod navigation;
