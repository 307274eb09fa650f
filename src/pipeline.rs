// THEORY:
// The `pipeline` module is the top-level synchronous API for zone lookup. It
// encapsulates the full stack into a single, easy-to-use interface: an
// immutable `ZoneContext` built once from a decoded map image, and pure query
// functions that take either a pixel coordinate or a geographic fix and return
// a `Classification`.
//
// Key architectural principles:
// 1.  **Immutable context**: Everything derived from the image (dimensions,
//     extracted legend) is computed once at construction and never mutated.
//     Queries borrow the context; there is no shared mutable state and no
//     locking anywhere.
// 2.  **Bounds before colors**: A query pixel is floored to integer indices and
//     bounds-checked first. Out-of-bounds short-circuits without touching the
//     sampler or the classifier.
// 3.  **Two entry points, one query**: Pointer-space pixels and geographic
//     fixes funnel into the same classification path; the transform is the
//     only difference.

use crate::core_modules::classifier;
use crate::core_modules::geo::{GeoFix, Projection};
use crate::core_modules::legend::{LegendEntry, LegendLayout, read_legend};
use crate::core_modules::sampler::MapImage;
use image::RgbaImage;
use tracing::debug;

// Re-export key data structures for the public API.
pub use crate::core_modules::classifier::MATCH_THRESHOLD;
pub use crate::core_modules::color::Rgb;
pub use crate::core_modules::geo::GeoError;

/// Configuration for a `ZoneContext`: the legend geometry and the geographic
/// calibration of one map asset. `Default` describes the Seattle zoning map.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    pub legend: LegendLayout,
    pub projection: Projection,
}

/// The result of classifying one query point. Ephemeral: computed per query,
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// The floored pixel fell outside the image.
    OutOfBounds,
    /// Every reference color was at least [`MATCH_THRESHOLD`] away.
    NoMatch,
    /// The nearest legend entry, with its index and distance.
    Matched {
        index: usize,
        entry: LegendEntry,
        distance: f64,
    },
}

impl Classification {
    /// Renders the user-facing report line. `location_kind` names how the
    /// query was produced ("selected" for pointer input, "current" for a
    /// geolocation fix).
    pub fn describe(&self, location_kind: &str) -> String {
        match self {
            Classification::OutOfBounds => {
                format!("Your {location_kind} location is outside the map")
            }
            Classification::NoMatch => {
                format!("Your {location_kind} location does not have a specified zone")
            }
            Classification::Matched { entry, .. } => {
                format!(
                    "Your {location_kind} location is zoned {} {}",
                    entry.prefix, entry.zone
                )
            }
        }
    }
}

/// The immutable post-load context: the decoded map, its extracted legend, and
/// its geographic calibration. Built exactly once, read-only thereafter.
pub struct ZoneContext {
    map: MapImage,
    legend: Vec<LegendEntry>,
    reference_colors: Vec<Rgb>,
    projection: Projection,
}

impl ZoneContext {
    /// Builds the context from a decoded image: stores the raster and extracts
    /// the legend's reference colors in one pass.
    pub fn new(image: RgbaImage, config: MapConfig) -> Self {
        let map = MapImage::new(image);
        let legend = read_legend(&map, &config.legend);
        let reference_colors = legend.iter().map(|entry| entry.color).collect();
        debug!(
            entries = legend.len(),
            width = map.width,
            height = map.height,
            "legend extracted"
        );
        Self {
            map,
            legend,
            reference_colors,
            projection: config.projection,
        }
    }

    /// The extracted legend, index-aligned with the reference color set.
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.map.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.map.height
    }

    /// Classifies a fractional pixel coordinate (pointer input is already in
    /// the image's native pixel space; the caller scales from display space).
    pub fn classify_pixel(&self, x: f64, y: f64) -> Classification {
        let px = x.floor();
        let py = y.floor();

        if px < 0.0 || py < 0.0 || px >= self.map.width as f64 || py >= self.map.height as f64 {
            debug!(x, y, "query outside the map");
            return Classification::OutOfBounds;
        }

        let query = self.map.sample(px as u32, py as u32);
        let (index, distance) = classifier::classify(query, &self.reference_colors);

        if !classifier::is_match(distance) {
            debug!(x, y, distance, "no zone within threshold");
            return Classification::NoMatch;
        }

        debug!(x, y, index, distance, zone = self.legend[index].zone, "zone matched");
        Classification::Matched {
            index,
            entry: self.legend[index].clone(),
            distance,
        }
    }

    /// Classifies a geographic fix by projecting it into pixel space first.
    pub fn classify_fix(&self, fix: GeoFix) -> Classification {
        let (x, y) = self.projection.to_pixel(fix);
        self.classify_pixel(x, y)
    }
}
