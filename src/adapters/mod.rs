pub mod pacing;
pub mod pixel_format;
