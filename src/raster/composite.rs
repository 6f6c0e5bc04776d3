use image::{GrayImage, Rgba, RgbaImage};

/// Copies `image` onto a transparent canvas and replaces its alpha with `mask`.
///
/// Whatever alpha `image` carried is discarded.
pub fn apply_mask(image: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    debug_assert_eq!(image.dimensions(), mask.dimensions());

    let (width, height) = mask.dimensions();
    let mut canvas = RgbaImage::new(width, height);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let Rgba([r, g, b, _]) = *image.get_pixel(x, y);
        *pixel = Rgba([r, g, b, mask.get_pixel(x, y)[0]]);
    }

    canvas
}
