use clap::Parser;
use fractal_explorer::controllers::cli::ExplorerArgs;
use tracing_subscriber::EnvFilter;

/// Interactive Mandelbrot and Julia explorer.
///
/// Wheel up zooms in on the pointer, wheel down goes back, right click opens
/// the fractal menu.
#[derive(Parser, Debug)]
#[command(name = "fractal_explorer_gui", version, about)]
struct Cli {
    #[command(flatten)]
    explorer: ExplorerArgs,

    /// Ticks per second
    #[arg(long, default_value_t = fractal_explorer::config::DEFAULT_TICK_RATE_HZ)]
    tick_rate: u32,

    /// Draw the unfinished raster under the progress line
    #[arg(long)]
    show_partial: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = fractal_explorer::ExplorerConfig {
        tick_rate_hz: cli.tick_rate,
        show_partial_raster: cli.show_partial,
        ..cli.explorer.to_config()
    };

    fractal_explorer::run_gui(&config)?;

    Ok(())
}
