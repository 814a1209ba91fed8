use crate::core::actions::fractal_job::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::num::NonZeroU32;

/// Greyscale bands: every escape step darkens the pixel by `255 / limit`.
///
/// Points that escape on the first step are white; with the default limit of
/// 40 the slowest band bottoms out at `255 - 6 * 39 = 21`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreyscaleBandsColourMap {
    delta: u32,
}

impl GreyscaleBandsColourMap {
    #[must_use]
    pub fn new(max_iterations: NonZeroU32) -> Self {
        Self {
            delta: 255 / max_iterations.get(),
        }
    }

    #[must_use]
    pub fn delta(&self) -> u32 {
        self.delta
    }
}

impl ColourMap for GreyscaleBandsColourMap {
    fn map(&self, escape_step: u32) -> Colour {
        let darkening = self.delta.saturating_mul(escape_step).min(255);

        Colour::grey((255 - darkening) as u8)
    }

    fn display_name(&self) -> &str {
        "Greyscale bands"
    }
}
