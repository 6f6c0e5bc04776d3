use std::path::PathBuf;

use image::{DynamicImage, RgbImage, Rgba, RgbaImage};

use crate::config::FeatureGraphicConfig;
use crate::error::Error;
use crate::raster::resize_exact;
use crate::resource::png::write_png;
use crate::resource::source::load_source;

pub const CANVAS_WIDTH: u32 = 1024;
pub const CANVAS_HEIGHT: u32 = 500;
pub const CONTENT_HEIGHT_RATIO: f64 = 0.8;
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Where the scaled source lands on the canvas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub x: i64,
    pub y: i64,
}

/// Fits the source to the content height, never upscaling, and centers it.
pub fn layout(source_width: u32, source_height: u32) -> Placement {
    let max_height = (CANVAS_HEIGHT as f64 * CONTENT_HEIGHT_RATIO) as u32;

    let (width, height) = if source_height > max_height {
        let scale = max_height as f64 / source_height as f64;
        let width = (source_width as f64 * scale) as u32;
        (width.max(1), max_height)
    } else {
        (source_width, source_height)
    };

    Placement {
        width,
        height,
        x: (CANVAS_WIDTH as i64 - width as i64).div_euclid(2),
        y: (CANVAS_HEIGHT as i64 - height as i64).div_euclid(2),
    }
}

pub fn compose_feature_graphic(source: &RgbaImage) -> RgbImage {
    let placement = layout(source.width(), source.height());
    let scaled = resize_exact(source, placement.width, placement.height);

    log::debug!(
        "Placing {}x{} content at ({}, {})",
        placement.width,
        placement.height,
        placement.x,
        placement.y
    );

    // Overlay clips whatever falls outside the canvas.
    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
    image::imageops::overlay(&mut canvas, &scaled, placement.x, placement.y);

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Writes the letterboxed feature graphic and returns its path.
pub fn create_feature_graphic(config: &FeatureGraphicConfig) -> Result<PathBuf, Error> {
    log::info!("Loading source image: {}", config.source.display());

    let source = load_source(&config.source)?;
    let graphic = compose_feature_graphic(&source);

    write_png(&graphic, &config.output)?;
    log::info!(
        "Created feature graphic {} ({CANVAS_WIDTH}x{CANVAS_HEIGHT})",
        config.output.display()
    );

    Ok(config.output.clone())
}
