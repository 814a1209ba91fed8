use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    (pixel_rect.size() * 3) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of raster bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for RasterError {}

pub type RasterData = Vec<u8>;

/// Packed RGB image, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixel_rect: PixelRect,
    buffer: RasterData,
}

impl Raster {
    /// A raster filled with black.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn buffer(&self) -> &RasterData {
        &self.buffer
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Some((relative_y * self.pixel_rect.width() as usize + relative_x) * 3)
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.index_of(pixel).map(|index| Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), RasterError> {
        let Some(index) = self.index_of(pixel) else {
            return Err(RasterError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        };

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::with_size(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_black_raster() {
        let pixel_rect = create_pixel_rect(10, 10);
        let raster = Raster::new(pixel_rect);

        assert_eq!(raster.pixel_rect(), pixel_rect);
        assert_eq!(raster.buffer().len(), 300);
        assert!(raster.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_is_row_major() {
        let mut raster = Raster::new(create_pixel_rect(3, 3));
        let red = Colour { r: 255, g: 0, b: 0 };

        raster.set_pixel(Point { x: 2, y: 1 }, red).unwrap();

        assert_eq!(&raster.buffer()[15..18], &[255, 0, 0]);
        assert_eq!(raster.pixel(Point { x: 2, y: 1 }), Some(red));
        assert_eq!(raster.pixel(Point { x: 1, y: 2 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut raster = Raster::new(pixel_rect);

        let result = raster.set_pixel(Point { x: 3, y: 0 }, Colour::WHITE);

        assert_eq!(
            result,
            Err(RasterError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 0 },
                pixel_rect
            })
        );
        assert_eq!(raster.pixel(Point { x: -1, y: 0 }), None);
    }
}
