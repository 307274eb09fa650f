// THEORY:
// The `classifier` module is the decision core of the crate: given one query
// color and the small, fixed reference set extracted from the legend, it names
// the nearest reference or rejects the query outright.
//
// Key architectural principles:
// 1.  **Linear scan, stable ties**: The reference set has ten entries, so a
//     plain O(N) scan beats any indexing structure. Strict `<` during the scan
//     makes ties resolve to the first occurrence, i.e. the lowest index.
// 2.  **Calibrated rejection**: A pixel between zones (roads, water, anti-aliased
//     boundaries) is nearest to *something*, but not meaningfully so. The
//     rejection threshold of 62.0 is calibrated to this legend's color
//     separation and must not be retuned casually: a best distance at or above
//     it means "no specified zone" regardless of which index was nearest.

use crate::core_modules::color::Rgb;

/// Best distances at or above this reject the classification entirely.
/// Calibrated to the legend's minimum inter-color separation.
pub const MATCH_THRESHOLD: f64 = 62.0;

/// Finds the reference color nearest to `query`.
///
/// Returns the winning index and its distance. Exact ties go to the lowest
/// index. The caller applies [`MATCH_THRESHOLD`]; this function only ranks.
///
/// # Panics
///
/// Panics if `refs` is empty; the legend is extracted before any query runs.
pub fn classify(query: Rgb, refs: &[Rgb]) -> (usize, f64) {
    assert!(!refs.is_empty(), "classify called with an empty reference set");

    let mut best_index = 0;
    let mut best_dist = f64::INFINITY;

    for (i, reference) in refs.iter().enumerate() {
        let dist = query.distance(reference);
        if dist < best_dist {
            best_dist = dist;
            best_index = i;
        }
    }

    (best_index, best_dist)
}

/// True when a best distance is close enough to count as a match.
pub fn is_match(best_dist: f64) -> bool {
    best_dist < MATCH_THRESHOLD
}
