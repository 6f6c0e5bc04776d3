use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, PixelWithColorType};

use crate::error::Error;

/// Encodes `image` as a PNG at `path`, replacing any existing file.
pub fn write_png<P>(image: &ImageBuffer<P, Vec<u8>>, path: &Path) -> Result<(), Error>
where
    P: PixelWithColorType<Subpixel = u8>,
{
    let file = File::create(path).map_err(|error| Error::write_failed(path, error))?;
    let mut writer = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), P::COLOR_TYPE)
        .map_err(|error| Error::write_failed(path, error))?;

    writer
        .flush()
        .map_err(|error| Error::write_failed(path, error))?;

    Ok(())
}

/// Creates `dir` and its parents, logging when anything new was made.
pub fn ensure_directory(dir: &Path) -> Result<(), Error> {
    if dir.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|error| Error::write_failed(dir, error))?;
    log::info!("Created directory: {}", dir.display());

    Ok(())
}
