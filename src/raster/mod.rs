use image::imageops::FilterType;
use image::RgbaImage;

pub mod composite;
pub mod mask;

pub const RESAMPLING_FILTER: FilterType = FilterType::Lanczos3;

/// Stretches `image` to exactly `width`×`height`, ignoring its aspect ratio.
pub fn resize_exact(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }

    image::imageops::resize(image, width, height, RESAMPLING_FILTER)
}
