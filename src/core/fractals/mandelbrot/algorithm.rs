use crate::core::actions::fractal_job::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::iterate;
use std::num::NonZeroU32;

/// Mandelbrot set: the pixel's mapped coordinate is the constant, `z0 = 0`.
///
/// The viewport center lands two thirds across the raster so the main
/// cardioid sits roughly in the middle at the default zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    anchor: Point,
    max_iterations: NonZeroU32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, bounds: PixelRect, max_iterations: NonZeroU32) -> Self {
        let top_left = bounds.top_left();
        let anchor = Point {
            x: top_left.x + (bounds.width() / 3 * 2) as i32,
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

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, pixel: Point) -> u32 {
        let c = self.viewport.pixel_to_complex(pixel, self.anchor);

        iterate(Complex::ZERO, c, self.max_iterations.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_algorithm() -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(
            Viewport::new(0.0, 0.0, 0.003).unwrap(),
            PixelRect::with_size(1200, 850).unwrap(),
            NonZeroU32::new(40).unwrap(),
        )
    }

    #[test]
    fn test_anchor_uses_integer_division() {
        let algorithm = MandelbrotAlgorithm::new(
            Viewport::new(0.0, 0.0, 1.0).unwrap(),
            PixelRect::with_size(100, 51).unwrap(),
            NonZeroU32::new(10).unwrap(),
        );

        assert_eq!(algorithm.anchor(), Point { x: 66, y: 25 });
    }

    #[test]
    fn test_top_left_pixel_escapes_immediately() {
        let algorithm = default_algorithm();
        let c = Viewport::new(0.0, 0.0, 0.003)
            .unwrap()
            .pixel_to_complex(Point { x: 0, y: 0 }, algorithm.anchor());

        assert!((c.real - -2.4).abs() < 1e-12);
        assert!((c.imag - 1.275).abs() < 1e-12);
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), 0);
    }

    #[test]
    fn test_anchor_pixel_is_inside_the_set() {
        let algorithm = default_algorithm();

        assert_eq!(algorithm.compute(Point { x: 800, y: 425 }), 39);
    }
}
