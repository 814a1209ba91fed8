use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use std::error::Error;

/// Pixel size of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// A fixed-size surface the session draws onto once per tick.
pub trait RenderTarget {
    type Error: Error + 'static;

    fn bounds(&self) -> PixelRect;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, rect: PixelRect, colour: Colour) -> Result<(), Self::Error>;

    fn measure_text(&self, text: &str) -> TextExtent;

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, colour: Colour) -> Result<(), Self::Error>;

    fn present_frame(&mut self) -> Result<(), Self::Error>;

    /// Copies `raster` onto the target, anchored at the raster's own top-left.
    ///
    /// Pixels outside the target are skipped. Hosts with a faster path should
    /// override this.
    fn blit_raster(&mut self, raster: &Raster) -> Result<(), Self::Error> {
        blit_per_pixel(self, raster)
    }
}

/// Per-pixel copy used by the default [`RenderTarget::blit_raster`].
pub fn blit_per_pixel<R: RenderTarget + ?Sized>(target: &mut R, raster: &Raster) -> Result<(), R::Error> {
    let bounds = target.bounds();
    let rect = raster.pixel_rect();

    for y in rect.top_left().y..=rect.bottom_right().y {
        for x in rect.top_left().x..=rect.bottom_right().x {
            let pixel = Point { x, y };

            if !bounds.contains_point(pixel) {
                continue;
            }

            if let Some(colour) = raster.pixel(pixel) {
                target.set_pixel(pixel, colour)?;
            }
        }
    }

    Ok(())
}
