// THEORY:
// The `legend` module describes the fixed legend region printed on the map and
// performs the one-time extraction of its reference colors. The legend is a
// vertical strip of color swatches at known absolute pixel locations; the
// geometry is baked into configuration, not discovered dynamically, so there is
// no detection step and no runtime validation of the sample locations.
//
// Key architectural principles:
// 1.  **Index alignment**: The label list and the derived sample locations are
//     the same list walked in the same order. An extracted `LegendEntry` keeps
//     its label and its color together, so the invariant cannot drift.
// 2.  **Extract once, read forever**: `read_legend` runs exactly once, right
//     after the image decodes. The resulting entries are immutable; every
//     later query only borrows them.
// 3.  **Known-good coordinates**: Sample locations come from the same
//     configuration that shipped with the map asset. A location outside the
//     image would be a configuration bug, not a runtime condition, so the
//     extraction has no error path.

use crate::core_modules::color::Rgb;
use crate::core_modules::sampler::MapImage;

/// One extracted legend row: its grammatical prefix ("zoned *as a* City Park"),
/// its zone label, and the reference color sampled from its swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// The preposition joining "is zoned" to the zone label.
    pub prefix: &'static str,
    /// The human-readable zone category name.
    pub zone: &'static str,
    /// The reference color read from this row's swatch.
    pub color: Rgb,
}

/// The fixed geometry of the legend strip: swatch `i` sits at
/// `(x, y + increment * i)`.
#[derive(Debug, Clone)]
pub struct LegendLayout {
    /// Column of every swatch sample point.
    pub x: u32,
    /// Row of the first swatch sample point.
    pub y: u32,
    /// Vertical distance between consecutive swatch sample points.
    pub increment: u32,
    /// Ordered (prefix, zone) labels, index-aligned with the sample points.
    pub labels: &'static [(&'static str, &'static str)],
}

/// Labels for the Seattle zoning map this crate ships constants for.
pub const SEATTLE_LEGEND_LABELS: &[(&str, &str)] = &[
    ("as a", "City Park"),
    ("as", "Neighborhood Residential"),
    ("as", "Multi-Family Housing"),
    ("as", "Multi-Family Housing/Residential-Commercial"),
    ("as", "Downtown"),
    ("as", "Seattle Mixed"),
    ("for", "Commercial/Mixed Use"),
    ("for", "Manufacturing/Industrial"),
    ("as a", "Master Planning Community"),
    ("as a", "Major Institution"),
];

impl Default for LegendLayout {
    /// The legend geometry of the Seattle map asset.
    fn default() -> Self {
        Self {
            x: 2554,
            y: 1107,
            increment: 68,
            labels: SEATTLE_LEGEND_LABELS,
        }
    }
}

impl LegendLayout {
    /// The number of legend rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The sample location of row `i`.
    pub fn sample_point(&self, i: usize) -> (u32, u32) {
        (self.x, self.y + self.increment * i as u32)
    }
}

/// Reads every legend swatch from the loaded map, producing the ordered,
/// index-aligned reference set used by the classifier.
pub fn read_legend(map: &MapImage, layout: &LegendLayout) -> Vec<LegendEntry> {
    layout
        .labels
        .iter()
        .enumerate()
        .map(|(i, &(prefix, zone))| {
            let (x, y) = layout.sample_point(i);
            LegendEntry {
                prefix,
                zone,
                color: map.sample(x, y),
            }
        })
        .collect()
}
