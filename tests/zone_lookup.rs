// End-to-end lookup against a synthetic map asset: legend extraction from a
// generated PNG, pixel and geographic queries through the async service, and
// the user-facing report lines.

use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use zone_scout::{Classification, GeoFix, LegendLayout, MapConfig, Projection, Rgb, ZoneService};

const LABELS: &[(&str, &str)] = &[
    ("as a", "City Park"),
    ("as", "Neighborhood Residential"),
    ("for", "Commercial/Mixed Use"),
];

const SWATCHES: [[u8; 3]; 3] = [[30, 160, 60], [240, 230, 140], [200, 40, 40]];

/// Builds a 64x64 map: a legend strip of three swatches along the left edge,
/// a commercial-colored district in the lower right, and white elsewhere.
fn write_map(name: &str) -> PathBuf {
    let mut img = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
    for (i, c) in SWATCHES.iter().enumerate() {
        let top = 4 + 12 * i as u32;
        for y in top - 2..=top + 2 {
            for x in 2..10 {
                img.put_pixel(x, y, Rgba([c[0], c[1], c[2], 255]));
            }
        }
    }
    // District fill close to, but not exactly, the commercial swatch color.
    for y in 40..64 {
        for x in 40..64 {
            img.put_pixel(x, y, Rgba([205, 45, 38, 255]));
        }
    }
    let path = std::env::temp_dir().join(name);
    img.save(&path).expect("failed to write synthetic map");
    path
}

fn config() -> MapConfig {
    MapConfig {
        legend: LegendLayout {
            x: 6,
            y: 4,
            increment: 12,
            labels: LABELS,
        },
        // Anchor the projection inside the commercial district.
        projection: Projection {
            ref_x: 50.0,
            ref_y: 50.0,
            ..Projection::default()
        },
    }
}

#[tokio::test]
async fn legend_is_extracted_from_the_asset() {
    let service = ZoneService::open(write_map("zone_lookup_legend.png"), config());
    let ctx = service.context().await.unwrap();

    let legend = ctx.legend();
    assert_eq!(legend.len(), 3);
    for (entry, swatch) in legend.iter().zip(SWATCHES) {
        assert_eq!(entry.color, Rgb::new(swatch[0], swatch[1], swatch[2]));
    }
    assert_eq!(legend[2].zone, "Commercial/Mixed Use");
}

#[tokio::test]
async fn pixel_query_names_the_district() {
    let service = ZoneService::open(write_map("zone_lookup_pixel.png"), config());

    let result = service.classify_pixel(50.0, 50.0).await.unwrap();
    match &result {
        Classification::Matched { index, entry, distance } => {
            assert_eq!(*index, 2);
            assert_eq!(entry.zone, "Commercial/Mixed Use");
            assert!(*distance > 0.0 && *distance < 62.0);
        }
        other => panic!("expected a commercial match, got {other:?}"),
    }
    assert_eq!(
        result.describe("selected"),
        "Your selected location is zoned for Commercial/Mixed Use"
    );
}

#[tokio::test]
async fn geographic_query_projects_into_the_district() {
    let service = ZoneService::open(write_map("zone_lookup_geo.png"), config());
    let proj = Projection::default();

    // The anchor fix lands exactly on the anchor pixel inside the district.
    let result = service
        .classify_fix(GeoFix {
            longitude: proj.ref_longitude,
            latitude: proj.ref_latitude,
        })
        .await
        .unwrap();
    assert!(matches!(result, Classification::Matched { index: 2, .. }));

    // A fix a degree away projects thousands of pixels off the asset.
    let result = service
        .classify_fix(GeoFix {
            longitude: proj.ref_longitude + 1.0,
            latitude: proj.ref_latitude,
        })
        .await
        .unwrap();
    assert_eq!(result, Classification::OutOfBounds);
    assert_eq!(
        result.describe("current"),
        "Your current location is outside the map"
    );
}

#[tokio::test]
async fn unzoned_ground_is_rejected_with_a_message() {
    let service = ZoneService::open(write_map("zone_lookup_unzoned.png"), config());

    // White background: far beyond the threshold from every swatch.
    let result = service.classify_pixel(30.0, 30.0).await.unwrap();
    assert_eq!(result, Classification::NoMatch);
    assert_eq!(
        result.describe("current"),
        "Your current location does not have a specified zone"
    );
}
