use image::{GrayImage, Luma};

const COVERED: Luma<u8> = Luma([255]);
const UNCOVERED: Luma<u8> = Luma([0]);

/// Outline that an icon is cut to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MaskShape {
    /// Square with corners rounded by a fifth of the edge length.
    RoundedRectangle,
    /// Ellipse inscribed in the full raster; a circle for square rasters.
    Ellipse,
}

impl MaskShape {
    pub fn render(self, width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            if self.covers(width, height, x, y) {
                COVERED
            } else {
                UNCOVERED
            }
        })
    }

    /// Whether the center of pixel (`x`, `y`) falls inside the shape.
    pub fn covers(self, width: u32, height: u32, x: u32, y: u32) -> bool {
        let px = x as f64 + 0.5;
        let py = y as f64 + 0.5;
        let width = width as f64;
        let height = height as f64;

        match self {
            MaskShape::RoundedRectangle => {
                let radius = corner_radius(width as u32, height as u32) as f64;

                // Nearest point of the rectangle shrunk by the radius on every side.
                let cx = px.clamp(radius, width - radius);
                let cy = py.clamp(radius, height - radius);

                (px - cx).powi(2) + (py - cy).powi(2) <= radius * radius
            }
            MaskShape::Ellipse => {
                let semi_x = width / 2.0;
                let semi_y = height / 2.0;

                ((px - semi_x) / semi_x).powi(2) + ((py - semi_y) / semi_y).powi(2) <= 1.0
            }
        }
    }
}

pub fn corner_radius(width: u32, height: u32) -> u32 {
    width.min(height) / 5
}
