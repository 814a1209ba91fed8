use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use std::error::Error;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// Halving the scale left no valid viewport; nothing was pushed.
    ZoomLimitReached {
        viewport: Viewport,
        source: ViewportError,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomLimitReached { viewport, source } => {
                write!(
                    f,
                    "cannot zoom in further from pixel scale {}: {}",
                    viewport.pixel_scale(),
                    source
                )
            }
        }
    }
}

impl Error for NavigationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZoomLimitReached { source, .. } => Some(source),
        }
    }
}

/// Zoom history. The bottom entry is the session default and is never popped.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportStack {
    bounds: PixelRect,
    viewports: Vec<Viewport>,
}

impl ViewportStack {
    #[must_use]
    pub fn new(initial: Viewport, bounds: PixelRect) -> Self {
        Self {
            bounds,
            viewports: vec![initial],
        }
    }

    #[must_use]
    pub fn top(&self) -> Viewport {
        self.viewports[self.viewports.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    /// Always false: the floor viewport can't be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }

    #[must_use]
    pub fn is_at_floor(&self) -> bool {
        self.viewports.len() == 1
    }

    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        self.bounds
    }

    /// Recentres on `pointer` and halves the scale.
    pub fn zoom_in(&mut self, pointer: Point) -> Result<Viewport, NavigationError> {
        let top = self.top();
        let top_left = self.bounds.top_left();
        let centre_pixel = Point {
            x: top_left.x + (self.bounds.width() / 2) as i32,
            y: top_left.y + (self.bounds.height() / 2) as i32,
        };
        let centre = top.pixel_to_complex(pointer, centre_pixel);

        let zoomed = Viewport::new(centre.real, centre.imag, top.pixel_scale() / 2.0).map_err(
            |source| NavigationError::ZoomLimitReached {
                viewport: top,
                source,
            },
        )?;

        self.viewports.push(zoomed);

        debug!(
            depth = self.viewports.len(),
            center_x = zoomed.center_x(),
            center_y = zoomed.center_y(),
            pixel_scale = zoomed.pixel_scale(),
            "zoomed in"
        );

        Ok(zoomed)
    }

    /// Restores the previous viewport, or returns the floor unchanged.
    pub fn zoom_out(&mut self) -> Viewport {
        if self.is_at_floor() {
            debug!("zoom out ignored at the initial viewport");
            return self.top();
        }

        self.viewports.pop();

        let restored = self.top();
        debug!(
            depth = self.viewports.len(),
            pixel_scale = restored.pixel_scale(),
            "zoomed out"
        );

        restored
    }
}
