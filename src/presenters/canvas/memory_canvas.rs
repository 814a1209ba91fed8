use crate::controllers::interactive::ports::render_target::{
    RenderTarget, TextExtent, blit_per_pixel,
};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::data::raster::{Raster, RasterError};
use std::error::Error;
use std::fmt;

/// Horizontal advance of every glyph in the fixed-width text metric.
pub const GLYPH_ADVANCE: u32 = 8;
pub const GLYPH_HEIGHT: u32 = 16;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderTargetError {
    Raster(RasterError),
    RectOutsideCanvas { rect: PixelRect, canvas: PixelRect },
}

impl fmt::Display for RenderTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raster(err) => write!(f, "canvas write failed: {}", err),
            Self::RectOutsideCanvas { rect, canvas } => {
                write!(
                    f,
                    "rect {}x{} at ({}, {}) does not fit a {}x{} canvas",
                    rect.width(),
                    rect.height(),
                    rect.top_left().x,
                    rect.top_left().y,
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl Error for RenderTargetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Raster(err) => Some(err),
            Self::RectOutsideCanvas { .. } => None,
        }
    }
}

impl From<RasterError> for RenderTargetError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnText {
    pub text: String,
    pub origin: Point,
    pub colour: Colour,
}

/// Headless render target backed by a [`Raster`].
///
/// Text is recorded rather than rasterised; [`MemoryCanvas::texts`] returns
/// the strings of the last presented frame.
#[derive(Debug, Clone)]
pub struct MemoryCanvas {
    raster: Raster,
    pending_texts: Vec<DrawnText>,
    texts: Vec<DrawnText>,
    frames_presented: u64,
}

impl MemoryCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        Ok(Self {
            raster: Raster::new(PixelRect::with_size(width, height)?),
            pending_texts: Vec::new(),
            texts: Vec::new(),
            frames_presented: 0,
        })
    }

    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.raster.pixel(pixel)
    }

    #[must_use]
    pub fn texts(&self) -> &[DrawnText] {
        &self.texts
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderTarget for MemoryCanvas {
    type Error = RenderTargetError;

    fn bounds(&self) -> PixelRect {
        self.raster.pixel_rect()
    }

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Error> {
        Ok(self.raster.set_pixel(pixel, colour)?)
    }

    fn fill_rect(&mut self, rect: PixelRect, colour: Colour) -> Result<(), Self::Error> {
        let canvas = self.bounds();

        if !canvas.contains_rect(&rect) {
            return Err(RenderTargetError::RectOutsideCanvas { rect, canvas });
        }

        for y in rect.top_left().y..=rect.bottom_right().y {
            for x in rect.top_left().x..=rect.bottom_right().x {
                self.raster.set_pixel(Point { x, y }, colour)?;
            }
        }

        Ok(())
    }

    fn measure_text(&self, text: &str) -> TextExtent {
        TextExtent {
            width: text.chars().count() as u32 * GLYPH_ADVANCE,
            height: GLYPH_HEIGHT,
        }
    }

    fn draw_text(&mut self, text: &str, origin: Point, colour: Colour) -> Result<(), Self::Error> {
        self.pending_texts.push(DrawnText {
            text: text.to_string(),
            origin,
            colour,
        });

        Ok(())
    }

    fn present_frame(&mut self) -> Result<(), Self::Error> {
        self.texts = std::mem::take(&mut self.pending_texts);
        self.frames_presented += 1;

        Ok(())
    }

    fn blit_raster(&mut self, raster: &Raster) -> Result<(), Self::Error> {
        if raster.pixel_rect() == self.raster.pixel_rect() {
            self.raster.clone_from(raster);
            return Ok(());
        }

        blit_per_pixel(self, raster)
    }
}
