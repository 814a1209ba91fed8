use crate::core::actions::fractal_job::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::iterate;
use std::num::NonZeroU32;

pub const JULIA_CONSTANT: Complex = Complex::new(0.36, 0.36);

/// Filled Julia set for [`JULIA_CONSTANT`]: the pixel's mapped coordinate is `z0`.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    viewport: Viewport,
    anchor: Point,
    max_iterations: NonZeroU32,
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, bounds: PixelRect, max_iterations: NonZeroU32) -> Self {
        let top_left = bounds.top_left();
        let anchor = Point {
            x: top_left.x + (bounds.width() / 2) as i32,
            y: top_left.y + (bounds.height() / 2) as i32,
        };

        Self {
            viewport,
            anchor,
            max_iterations,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn compute(&self, pixel: Point) -> u32 {
        let z0 = self.viewport.pixel_to_complex(pixel, self.anchor);

        iterate(z0, JULIA_CONSTANT, self.max_iterations.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_algorithm() -> JuliaAlgorithm {
        JuliaAlgorithm::new(
            Viewport::new(0.0, 0.0, 0.003).unwrap(),
            PixelRect::with_size(1200, 850).unwrap(),
            NonZeroU32::new(40).unwrap(),
        )
    }

    #[test]
    fn test_anchor_is_raster_center() {
        assert_eq!(default_algorithm().anchor(), Point { x: 600, y: 425 });
    }

    #[test]
    fn test_corner_escapes_immediately() {
        // Maps to z0 = (-1.8, 1.275).
        assert_eq!(default_algorithm().compute(Point { x: 0, y: 0 }), 0);
    }

    #[test]
    fn test_center_matches_direct_iteration() {
        let expected = iterate(Complex::ZERO, JULIA_CONSTANT, 40);

        assert_eq!(default_algorithm().compute(Point { x: 600, y: 425 }), expected);
    }

    #[test]
    fn test_is_symmetric_through_the_center() {
        // z -> -z leaves z * z unchanged, so opposite pixels share a step count.
        let algorithm = default_algorithm();

        for (dx, dy) in [(10, 3), (-120, 40), (200, -150), (7, -7)] {
            let a = algorithm.compute(Point { x: 600 + dx, y: 425 + dy });
            let b = algorithm.compute(Point { x: 600 - dx, y: 425 - dy });

            assert_eq!(a, b);
        }
    }
}
