// THEORY:
// The `sampler` module is the bridge between the raw raster image and the color
// math in the rest of the crate. It owns the decoded map image and knows how to
// turn an integer pixel location into a single representative `Rgb` value.
//
// Key architectural principles:
// 1.  **One sampling strategy everywhere**: The same read is used for the
//     one-time legend extraction and for every on-demand query pixel, so a
//     query landing on a legend swatch reproduces the reference color exactly.
// 2.  **Neighborhood averaging**: A sample is the channel-wise mean of the 3x3
//     block centered on the requested pixel, with coordinates clamped at the
//     image border. Averaging cancels single-pixel artifacts from the map's
//     rasterization (anti-aliased zone boundaries, compression noise) the same
//     way chunk pooling does in region analysis.
// 3.  **Immutable after load**: The image is decoded once and never written.
//     Every sample is a pure read; samples are cheap and idempotent.

use crate::core_modules::color::Rgb;
use image::RgbaImage;

/// A loaded zoning-map raster, the sole source of both legend and query colors.
pub struct MapImage {
    image: RgbaImage,
    /// The full image width in pixels.
    pub width: u32,
    /// The full image height in pixels.
    pub height: u32,
}

impl MapImage {
    pub fn new(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            image,
            width,
            height,
        }
    }

    /// Reads the representative color at an in-bounds pixel location.
    ///
    /// The value is the mean of the 3x3 neighborhood centered on `(x, y)`,
    /// clamped at the borders, so a corner pixel averages its 3x3 window's
    /// in-bounds overlap (with border pixels weighted by the clamp).
    pub fn sample(&self, x: u32, y: u32) -> Rgb {
        let mut sum_r = 0u32;
        let mut sum_g = 0u32;
        let mut sum_b = 0u32;

        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let sx = (x as i64 + dx).clamp(0, self.width as i64 - 1) as u32;
                let sy = (y as i64 + dy).clamp(0, self.height as i64 - 1) as u32;
                let px = self.image.get_pixel(sx, sy);
                sum_r += px.0[0] as u32;
                sum_g += px.0[1] as u32;
                sum_b += px.0[2] as u32;
            }
        }

        Rgb::new((sum_r / 9) as u8, (sum_g / 9) as u8, (sum_b / 9) as u8)
    }
}
