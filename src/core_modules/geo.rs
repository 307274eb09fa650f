// THEORY:
// The `geo` module converts a geographic fix (longitude, latitude in degrees)
// into the map image's pixel space. The model is a local equirectangular
// approximation: a fixed reference coordinate is pinned to a fixed reference
// pixel, and each axis scales the angular offset from that anchor by the
// earth radius for that axis and by the map's pixels-per-mile scale.
//
// Key architectural principles:
// 1.  **Flat-earth on purpose**: No great-circle math and no projection
//     correction. The map covers a few miles around the anchor, where the
//     approximation error is far below one pixel.
// 2.  **Axis asymmetry**: Longitude scales by the equatorial radius; latitude
//     scales by the *negated* polar radius, because increasing latitude moves
//     north, which is up the image, which is decreasing y.
// 3.  **Exact anchor**: The reference coordinate maps to the reference pixel
//     exactly (zero angular offset contributes zero), so the calibration point
//     is reproducible bit-for-bit.

use std::f64::consts::PI;
use thiserror::Error;

/// Failure modes of a positioning API. These never reach the classifier; a
/// failed fix terminates only its own query, and the message carries the
/// platform's own description through to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("A PermissionDenied error occurred ({0})")]
    PermissionDenied(String),
    #[error("A PositionUnavailable error occurred ({0})")]
    PositionUnavailable(String),
    #[error("A Timeout error occurred ({0})")]
    Timeout(String),
}

/// A geographic position in degrees, as delivered by a positioning API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub longitude: f64,
    pub latitude: f64,
}

/// Calibration of the geographic-to-pixel transform for one map asset.
#[derive(Debug, Clone)]
pub struct Projection {
    /// Map scale, from the printed scale bar (485 px per 2 miles by default).
    pub px_per_mile: f64,
    /// Earth's equatorial radius in miles; scales the longitude axis.
    pub equatorial_radius_miles: f64,
    /// Earth's polar radius in miles; scales the latitude axis (negated).
    pub polar_radius_miles: f64,
    /// Longitude of the calibration anchor.
    pub ref_longitude: f64,
    /// Latitude of the calibration anchor.
    pub ref_latitude: f64,
    /// Pixel x of the calibration anchor.
    pub ref_x: f64,
    /// Pixel y of the calibration anchor.
    pub ref_y: f64,
}

impl Default for Projection {
    /// Calibration of the Seattle map asset.
    fn default() -> Self {
        Self {
            px_per_mile: 485.0 / 2.0,
            equatorial_radius_miles: 3963.1906,
            polar_radius_miles: 3949.9028,
            ref_longitude: -122.300880,
            ref_latitude: 47.686690,
            ref_x: 1706.0,
            ref_y: 949.0,
        }
    }
}

impl Projection {
    /// Projects one axis: angular offset in degrees -> arc length in miles
    /// (at the given radius) -> pixels, offset from the anchor pixel.
    fn axis(&self, degrees: f64, radius_miles: f64, base_degrees: f64, base_px: f64) -> f64 {
        ((degrees - base_degrees) / 180.0 * PI * radius_miles) * self.px_per_mile + base_px
    }

    /// Converts a geographic fix into fractional pixel coordinates.
    pub fn to_pixel(&self, fix: GeoFix) -> (f64, f64) {
        let x = self.axis(
            fix.longitude,
            self.equatorial_radius_miles,
            self.ref_longitude,
            self.ref_x,
        );
        // Negated radius: a decrease in y is an increase in latitude.
        let y = self.axis(
            fix.latitude,
            -self.polar_radius_miles,
            self.ref_latitude,
            self.ref_y,
        );
        (x, y)
    }
}
