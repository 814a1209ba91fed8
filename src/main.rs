use clap::Parser;
use fractal_explorer::controllers::cli::{ExplorerArgs, parse_point};
use fractal_explorer::{CliRenderController, NavigationScript, Point, PpmFilePresenter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Renders a fractal view to a PPM file, replaying wheel navigation first.
///
/// Example:
///   fractal_explorer --zoom 600,425 --zoom 100,80 --output zoomed.ppm
#[derive(Parser, Debug)]
#[command(name = "fractal_explorer", version, about)]
struct Cli {
    #[command(flatten)]
    explorer: ExplorerArgs,

    /// Zoom in centred on pixel x,y (repeatable, applied in order)
    #[arg(long = "zoom", value_parser = parse_point)]
    zoom_in_at: Vec<Point>,

    /// Zoom out this many times after all zoom-ins
    #[arg(long, default_value_t = 0)]
    zoom_outs: u32,

    /// Output PPM path
    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.explorer.to_config();
    let script = NavigationScript {
        zoom_in_at: cli.zoom_in_at,
        zoom_outs: cli.zoom_outs,
    };

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut controller = CliRenderController::new(PpmFilePresenter::new());
    controller.generate(&config, script)?;
    controller.write(&cli.output)?;

    Ok(())
}
