// THEORY:
// The `color` module is the most fundamental unit of the zoning system. It is a
// "dumb" data container for a single RGB color plus the one metric the rest of
// the crate is built on: Euclidean distance in RGB space. Anything that needs a
// whole set of colors (nearest-match scans, rejection thresholds) belongs in the
// `classifier` module; anything that needs the source image belongs in `sampler`.
//
// Key principles:
// 1.  **Single-color scope**: No knowledge of legends, images, or thresholds.
// 2.  **Plain RGB**: The zoning map's legend colors are flat print colors with
//     large separation, so straight RGB distance is sufficient. No perceptual
//     color space is involved anywhere in the crate.

/// A "dumb" data container representing a single RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel value (0-255).
    pub r: u8,
    /// The green channel value (0-255).
    pub g: u8,
    /// The blue channel value (0-255).
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance to another color in RGB space.
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_zero_for_identical_colors() {
        let c = Rgb::new(120, 45, 200);
        assert_eq!(c.distance(&c), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::new(0, 255, 0);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn distance_matches_hand_computation() {
        // (250,10,10) vs (255,0,0): sqrt(25 + 100 + 100) = 15.0
        let query = Rgb::new(250, 10, 10);
        let red = Rgb::new(255, 0, 0);
        assert!((query.distance(&red) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn single_axis_distance_is_the_channel_delta() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(62, 0, 0);
        assert_eq!(a.distance(&b), 62.0);
    }
}
