// THEORY:
// This file is the main entry point for the `zone_scout` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like a map-frontend shell).
//
// The primary goal is to export the `ZoneService`, `ZoneContext`, and their
// associated data structures (`MapConfig`, `Classification`, `GeoFix`, etc.)
// as the clean, high-level interface for the whole lookup engine. The internal
// modules (`core_modules`) stay encapsulated: the sampler, the classifier, and
// the projection are implementation details of the pipeline.

pub mod core_modules;
pub mod pipeline;
pub mod service;

pub use core_modules::geo::{GeoError, GeoFix, Projection};
pub use core_modules::legend::{LegendEntry, LegendLayout};
pub use pipeline::{Classification, MapConfig, Rgb, ZoneContext};
pub use service::ZoneService;
