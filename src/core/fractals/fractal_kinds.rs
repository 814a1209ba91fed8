use crate::core::actions::fractal_job::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use std::fmt;
use std::num::NonZeroU32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKind {
    /// Every kind, in menu order.
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }

    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot fractal",
            Self::Julia => "Julia fractal",
        }
    }

    #[must_use]
    pub fn algorithm(
        self,
        viewport: Viewport,
        bounds: PixelRect,
        max_iterations: NonZeroU32,
    ) -> Box<dyn FractalAlgorithm> {
        match self {
            Self::Mandelbrot => Box::new(MandelbrotAlgorithm::new(viewport, bounds, max_iterations)),
            Self::Julia => Box::new(JuliaAlgorithm::new(viewport, bounds, max_iterations)),
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    #[test]
    fn test_menu_order_and_labels() {
        let labels: Vec<&str> = FractalKind::ALL.iter().map(|k| k.menu_label()).collect();

        assert_eq!(labels, vec!["Mandelbrot fractal", "Julia fractal"]);
    }

    #[test]
    fn test_default_is_mandelbrot() {
        assert_eq!(FractalKind::default(), FractalKind::Mandelbrot);
        assert_eq!(FractalKind::Julia.to_string(), "Julia");
    }

    #[test]
    fn test_algorithm_dispatches_on_kind() {
        let viewport = Viewport::new(0.0, 0.0, 0.003).unwrap();
        let bounds = PixelRect::with_size(1200, 850).unwrap();
        let limit = NonZeroU32::new(40).unwrap();

        let mandelbrot = FractalKind::Mandelbrot.algorithm(viewport, bounds, limit);
        let julia = FractalKind::Julia.algorithm(viewport, bounds, limit);

        // c = 0 is deep inside the Mandelbrot set but z0 = (0.6, 0) escapes for Julia.
        assert_eq!(mandelbrot.compute(Point { x: 800, y: 425 }), 39);
        assert!(julia.compute(Point { x: 800, y: 425 }) < 39);
    }
}
