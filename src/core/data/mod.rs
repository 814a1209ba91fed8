pub mod colour;
pub mod complex;
pub mod pixel_rect;
pub mod point;
pub mod raster;
pub mod viewport;
