use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::menu::menu_layout::{MenuLayout, MenuLayoutError};
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 850;
pub const DEFAULT_CENTER_X: f64 = 0.0;
pub const DEFAULT_CENTER_Y: f64 = 0.0;
pub const DEFAULT_PIXEL_SCALE: f64 = 0.003;
pub const DEFAULT_MAX_ITERATIONS: u32 = 40;
pub const DEFAULT_QUANTUM: u64 = 10_000;
pub const DEFAULT_TICK_RATE_HZ: u32 = 25;
pub const DEFAULT_MENU_ITEM_WIDTH: u32 = 260;
pub const DEFAULT_MENU_ITEM_HEIGHT: u32 = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Bounds(PixelRectError),
    Viewport(ViewportError),
    Menu(MenuLayoutError),
    ZeroIterationLimit,
    ZeroQuantum,
    ZeroTickRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(err) => write!(f, "invalid raster size: {}", err),
            Self::Viewport(err) => write!(f, "invalid initial viewport: {}", err),
            Self::Menu(err) => write!(f, "invalid menu layout: {}", err),
            Self::ZeroIterationLimit => write!(f, "iteration limit must be greater than zero"),
            Self::ZeroQuantum => write!(f, "pixels per tick must be greater than zero"),
            Self::ZeroTickRate => write!(f, "tick rate must be greater than zero"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bounds(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Menu(err) => Some(err),
            Self::ZeroIterationLimit | Self::ZeroQuantum | Self::ZeroTickRate => None,
        }
    }
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::Bounds(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<MenuLayoutError> for ConfigError {
    fn from(err: MenuLayoutError) -> Self {
        Self::Menu(err)
    }
}

/// Everything a session needs to know before the first tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    pub center_x: f64,
    pub center_y: f64,
    pub pixel_scale: f64,
    pub max_iterations: u32,
    /// Pixels evaluated per tick.
    pub quantum: u64,
    pub tick_rate_hz: u32,
    pub menu_item_width: u32,
    pub menu_item_height: u32,
    pub initial_kind: FractalKind,
    /// Draw the half-finished raster behind the progress text instead of black.
    pub show_partial_raster: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            pixel_scale: DEFAULT_PIXEL_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            quantum: DEFAULT_QUANTUM,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            menu_item_width: DEFAULT_MENU_ITEM_WIDTH,
            menu_item_height: DEFAULT_MENU_ITEM_HEIGHT,
            initial_kind: FractalKind::default(),
            show_partial_raster: false,
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.menu_layout()?;
        self.initial_viewport()?;
        self.iteration_limit()?;
        self.tick_interval()?;

        if self.quantum == 0 {
            return Err(ConfigError::ZeroQuantum);
        }

        Ok(())
    }

    pub fn bounds(&self) -> Result<PixelRect, ConfigError> {
        Ok(PixelRect::with_size(self.width, self.height)?)
    }

    pub fn initial_viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(Viewport::new(self.center_x, self.center_y, self.pixel_scale)?)
    }

    pub fn iteration_limit(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.max_iterations).ok_or(ConfigError::ZeroIterationLimit)
    }

    pub fn menu_layout(&self) -> Result<MenuLayout, ConfigError> {
        Ok(MenuLayout::new(
            self.menu_item_width,
            self.menu_item_height,
            self.bounds()?,
        )?)
    }

    pub fn tick_interval(&self) -> Result<Duration, ConfigError> {
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(Duration::from_secs(1) / self.tick_rate_hz)
    }
}
