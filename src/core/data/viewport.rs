use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteCenter { center_x: f64, center_y: f64 },
    InvalidPixelScale { pixel_scale: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCenter { center_x, center_y } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center_x, center_y
                )
            }
            Self::InvalidPixelScale { pixel_scale } => {
                write!(
                    f,
                    "viewport pixel scale must be positive and finite: {}",
                    pixel_scale
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Affine mapping from raster pixels onto the complex plane.
///
/// `pixel_scale` is the width of one pixel in plane units. The imaginary axis
/// points up, so moving down the raster decreases the imaginary part.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    pixel_scale: f64,
}

impl Viewport {
    pub fn new(center_x: f64, center_y: f64, pixel_scale: f64) -> Result<Self, ViewportError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ViewportError::NonFiniteCenter { center_x, center_y });
        }

        if !pixel_scale.is_finite() || pixel_scale <= 0.0 {
            return Err(ViewportError::InvalidPixelScale { pixel_scale });
        }

        Ok(Self {
            center_x,
            center_y,
            pixel_scale,
        })
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn pixel_scale(&self) -> f64 {
        self.pixel_scale
    }

    /// Maps `pixel` to the plane, with `anchor` being the pixel that lands on the center.
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point, anchor: Point) -> Complex {
        let dx = i64::from(pixel.x) - i64::from(anchor.x);
        let dy = i64::from(pixel.y) - i64::from(anchor.y);

        Complex {
            real: self.center_x + dx as f64 * self.pixel_scale,
            imag: self.center_y - dy as f64 * self.pixel_scale,
        }
    }
}
