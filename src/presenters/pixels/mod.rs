pub mod canvas;
pub mod textures;
