use crate::config::{self, ExplorerConfig};
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKind;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Mandelbrot,
    Julia,
}

impl From<KindArg> for FractalKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Mandelbrot => FractalKind::Mandelbrot,
            KindArg::Julia => FractalKind::Julia,
        }
    }
}

/// Options shared by the headless renderer and the window binary.
#[derive(Args, Debug, Clone)]
pub struct ExplorerArgs {
    /// Fractal shown first
    #[arg(long, value_enum, default_value_t = KindArg::Mandelbrot)]
    pub kind: KindArg,

    /// Raster width in pixels
    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    pub width: u32,

    /// Raster height in pixels
    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    pub height: u32,

    /// Real part of the initial view centre
    #[arg(long, default_value_t = config::DEFAULT_CENTER_X, allow_hyphen_values = true)]
    pub center_x: f64,

    /// Imaginary part of the initial view centre
    #[arg(long, default_value_t = config::DEFAULT_CENTER_Y, allow_hyphen_values = true)]
    pub center_y: f64,

    /// Complex units per pixel of the initial view
    #[arg(long, default_value_t = config::DEFAULT_PIXEL_SCALE)]
    pub scale: f64,

    /// Iteration limit
    #[arg(long, default_value_t = config::DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Pixels computed per tick
    #[arg(long, default_value_t = config::DEFAULT_QUANTUM)]
    pub quantum: u64,
}

impl ExplorerArgs {
    #[must_use]
    pub fn to_config(&self) -> ExplorerConfig {
        ExplorerConfig {
            width: self.width,
            height: self.height,
            center_x: self.center_x,
            center_y: self.center_y,
            pixel_scale: self.scale,
            max_iterations: self.iterations,
            quantum: self.quantum,
            initial_kind: self.kind.into(),
            ..ExplorerConfig::default()
        }
    }
}

/// Parses `x,y` into a pixel position.
pub fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", value))?;

    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid x '{}': {}", x, err))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid y '{}': {}", y, err))?;

    Ok(Point::new(x, y))
}
