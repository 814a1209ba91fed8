use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::raster::Raster;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Binary PPM (P6) encoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(&self, raster: &Raster, writer: &mut impl Write) -> std::io::Result<()> {
        // P6 means binary RGB, then width, height and max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", raster.width(), raster.height())?;
        writeln!(writer, "255")?;
        writer.write_all(raster.buffer())?;

        Ok(())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &Raster, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let mut writer = BufWriter::new(File::create(filepath)?);

        self.encode(raster, &mut writer)?;
        writer.flush()?;

        info!(path = %filepath.display(), "raster written");

        Ok(())
    }
}
