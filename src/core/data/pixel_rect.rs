use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be at least 2x2: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive pixel rectangle: both corners belong to the rect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = i64::from(bottom_right.x) - i64::from(top_left.x);
        let dy = i64::from(bottom_right.y) - i64::from(top_left.y);

        let width = dx + if dx >= 0 { 1 } else { -1 };
        let height = dy + if dy >= 0 { 1 } else { -1 };

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_origin_and_size(
        origin: Point,
        width: u32,
        height: u32,
    ) -> Result<Self, PixelRectError> {
        let invalid = PixelRectError::InvalidSize {
            width: i64::from(width),
            height: i64::from(height),
        };

        if width < 2 || height < 2 {
            return Err(invalid);
        }

        let right = i64::from(origin.x) + i64::from(width) - 1;
        let bottom = i64::from(origin.y) + i64::from(height) - 1;

        let bottom_right = Point {
            x: i32::try_from(right).map_err(|_| invalid)?,
            y: i32::try_from(bottom).map_err(|_| invalid)?,
        };

        Self::new(origin, bottom_right)
    }

    /// A `width x height` rect anchored at the origin, as used for whole rasters.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        Self::from_origin_and_size(Point::default(), width, height)
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn contains_rect(&self, other: &PixelRect) -> bool {
        self.contains_point(other.top_left) && self.contains_point(other.bottom_right)
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let top_left = Point { x: 0, y: 0 };
        let bottom_right = Point { x: 100, y: 100 };

        let rect = PixelRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
    }

    #[test]
    fn test_pixel_rect_dimensions() {
        let rect = PixelRect::new(Point { x: -10, y: -20 }, Point { x: 110, y: 80 }).unwrap();

        assert_eq!(rect.width(), 121);
        assert_eq!(rect.height(), 101);
        assert_eq!(rect.size(), 12221);
    }

    #[test]
    fn test_pixel_rect_dimensions_must_be_positive() {
        let rect_negative_width = PixelRect::new(Point { x: 0, y: 0 }, Point { x: -100, y: 10 });
        let rect_negative_height = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 100, y: -10 });

        assert_eq!(
            rect_negative_width,
            Err(PixelRectError::InvalidSize {
                width: -101,
                height: 11
            })
        );
        assert_eq!(
            rect_negative_height,
            Err(PixelRectError::InvalidSize {
                width: 101,
                height: -11
            })
        );
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_two_pixels_wide_and_tall() {
        let single_pixel = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 0, y: 0 });
        let one_pixel_tall = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 10, y: 0 });
        let two_pixels_square = PixelRect::new(Point { x: 0, y: 0 }, Point { x: 1, y: 1 });

        assert_eq!(
            single_pixel,
            Err(PixelRectError::InvalidSize {
                width: 1,
                height: 1
            })
        );
        assert_eq!(
            one_pixel_tall,
            Err(PixelRectError::InvalidSize {
                width: 11,
                height: 1
            })
        );
        assert!(two_pixels_square.is_ok());
    }

    #[test]
    fn test_with_size_is_anchored_at_origin() {
        let rect = PixelRect::with_size(1200, 850).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 1199, y: 849 });
        assert_eq!(rect.width(), 1200);
        assert_eq!(rect.height(), 850);
    }

    #[test]
    fn test_from_origin_and_size_rejects_degenerate_sizes() {
        assert_eq!(
            PixelRect::with_size(0, 10),
            Err(PixelRectError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert!(PixelRect::from_origin_and_size(Point { x: i32::MAX, y: 0 }, 10, 10).is_err());
    }

    #[test]
    fn test_pixel_rect_contains_point() {
        let rect = PixelRect::new(Point { x: -50, y: -50 }, Point { x: 100, y: 100 }).unwrap();

        assert!(rect.contains_point(Point { x: 50, y: 50 }));
        assert!(rect.contains_point(Point { x: -50, y: -50 }));
        assert!(rect.contains_point(Point { x: 100, y: 100 }));
        assert!(!rect.contains_point(Point { x: 101, y: 50 }));
        assert!(!rect.contains_point(Point { x: -51, y: 50 }));
        assert!(!rect.contains_point(Point { x: 50, y: -51 }));
        assert!(!rect.contains_point(Point { x: 50, y: 101 }));
    }

    #[test]
    fn test_pixel_rect_contains_rect() {
        let outer = PixelRect::with_size(100, 100).unwrap();
        let inner = PixelRect::from_origin_and_size(Point { x: 10, y: 10 }, 20, 20).unwrap();
        let overlapping = PixelRect::from_origin_and_size(Point { x: 90, y: 90 }, 20, 20).unwrap();

        assert!(outer.contains_rect(&inner));
        assert!(!outer.contains_rect(&overlapping));
    }
}
