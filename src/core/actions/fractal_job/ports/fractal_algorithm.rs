use crate::core::data::point::Point;

/// Per-pixel escape-time computation for one viewport and raster size.
pub trait FractalAlgorithm: Send + Sync {
    /// Escape step for `pixel`, below the algorithm's iteration limit.
    fn compute(&self, pixel: Point) -> u32;
}
