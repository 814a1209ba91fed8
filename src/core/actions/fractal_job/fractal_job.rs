use crate::core::actions::fractal_job::ports::colour_map::ColourMap;
use crate::core::actions::fractal_job::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::raster::{Raster, RasterError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::colour_mapping::greyscale_bands::GreyscaleBandsColourMap;
use crate::core::fractals::fractal_kinds::FractalKind;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Result of one [`FractalJob::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum JobStatus {
    /// Fraction of the raster evaluated so far, in `[0, 1)`.
    InProgress(f64),
    /// Every pixel has been evaluated; the raster is frozen and shared.
    Complete(Arc<Raster>),
}

/// Resumable sweep over every pixel of one raster.
///
/// Pixels are visited column by column: the cursor walks down a column before
/// moving one step right. Work only happens inside [`FractalJob::advance`], so
/// dropping a job at any point simply abandons it.
pub struct FractalJob {
    kind: FractalKind,
    viewport: Viewport,
    bounds: PixelRect,
    algorithm: Box<dyn FractalAlgorithm>,
    colour_map: Box<dyn ColourMap>,
    raster: Arc<Raster>,
    complete: bool,
    next_x: u32,
    next_y: u32,
    pixels_done: u64,
    started_at: Instant,
}

impl FractalJob {
    #[must_use]
    pub fn start(
        kind: FractalKind,
        viewport: Viewport,
        bounds: PixelRect,
        max_iterations: NonZeroU32,
    ) -> Self {
        info!(
            kind = %kind,
            center_x = viewport.center_x(),
            center_y = viewport.center_y(),
            pixel_scale = viewport.pixel_scale(),
            width = bounds.width(),
            height = bounds.height(),
            "fractal job started"
        );

        Self {
            kind,
            viewport,
            bounds,
            algorithm: kind.algorithm(viewport, bounds, max_iterations),
            colour_map: Box::new(GreyscaleBandsColourMap::new(max_iterations)),
            raster: Arc::new(Raster::new(bounds)),
            complete: false,
            next_x: 0,
            next_y: 0,
            pixels_done: 0,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    #[must_use]
    pub fn pixels_done(&self) -> u64 {
        self.pixels_done
    }

    #[must_use]
    pub fn total_pixels(&self) -> u64 {
        self.bounds.size()
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.pixels_done as f64 / self.total_pixels() as f64
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The raster as it stands: partially filled while running, final once complete.
    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Evaluates up to `quantum` further pixels and reports where the job stands.
    ///
    /// A write outside the raster stops the job where it is and returns the error.
    pub fn advance(&mut self, quantum: u64) -> Result<JobStatus, RasterError> {
        if self.complete {
            return Ok(JobStatus::Complete(Arc::clone(&self.raster)));
        }

        let total = self.total_pixels();
        let height = self.bounds.height();
        let top_left = self.bounds.top_left();

        // Unshared until completion, so this never copies.
        let raster = Arc::make_mut(&mut self.raster);
        let mut remaining = quantum;

        while remaining > 0 && self.pixels_done < total {
            let pixel = Point {
                x: top_left.x + self.next_x as i32,
                y: top_left.y + self.next_y as i32,
            };
            let colour = self.colour_map.map(self.algorithm.compute(pixel));

            raster.set_pixel(pixel, colour)?;

            self.next_y += 1;
            if self.next_y == height {
                self.next_y = 0;
                self.next_x += 1;
            }

            self.pixels_done += 1;
            remaining -= 1;
        }

        if self.pixels_done < total {
            debug!(
                kind = %self.kind,
                pixels_done = self.pixels_done,
                total,
                "fractal job advanced"
            );

            return Ok(JobStatus::InProgress(self.progress()));
        }

        self.complete = true;

        info!(
            kind = %self.kind,
            elapsed_ms = self.started_at.elapsed().as_millis() as u64,
            "fractal job complete"
        );

        Ok(JobStatus::Complete(Arc::clone(&self.raster)))
    }
}

impl std::fmt::Debug for FractalJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FractalJob")
            .field("kind", &self.kind)
            .field("viewport", &self.viewport)
            .field("bounds", &self.bounds)
            .field("colour_map", &self.colour_map.display_name())
            .field("next_x", &self.next_x)
            .field("next_y", &self.next_y)
            .field("pixels_done", &self.pixels_done)
            .field("complete", &self.is_complete())
            .finish_non_exhaustive()
    }
}
