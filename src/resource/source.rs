use std::path::Path;

use image::RgbaImage;

use crate::error::Error;

/// Loads the source image as 8-bit RGBA.
///
/// The format is sniffed from the file contents rather than the extension.
pub fn load_source(path: &Path) -> Result<RgbaImage, Error> {
    if !path.exists() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = image::ImageReader::open(path)
        .map_err(|error| Error::decode_failed(path, error))?
        .with_guessed_format()
        .map_err(|error| Error::decode_failed(path, error))?;

    let decoded = reader
        .decode()
        .map_err(|error| Error::decode_failed(path, error))?;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(Error::decode_failed(path, "the image has no pixels"));
    }

    log::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(decoded.to_rgba8())
}
