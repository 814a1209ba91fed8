use crate::core::data::raster::Raster;
use std::path::Path;

/// Writes a finished raster to disk in some image format.
pub trait FilePresenterPort {
    fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
