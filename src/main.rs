// This file is an example runner for the `zone_scout` library.
// The main library entry point is `src/lib.rs`.

use zone_scout::{Classification, GeoFix, MapConfig, ZoneService};

fn usage() -> ! {
    eprintln!("usage: zone_scout <map.png> pixel <x> <y>");
    eprintln!("       zone_scout <map.png> geo <longitude> <latitude>");
    std::process::exit(2);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [map_path, mode, a, b] = args.as_slice() else {
        usage();
    };

    let service = ZoneService::open(map_path, MapConfig::default());

    let (classification, kind) = match mode.as_str() {
        "pixel" => {
            let x: f64 = a.parse()?;
            let y: f64 = b.parse()?;
            (service.classify_pixel(x, y).await?, "selected")
        }
        "geo" => {
            let fix = GeoFix {
                longitude: a.parse()?,
                latitude: b.parse()?,
            };
            (service.classify_fix(fix).await?, "current")
        }
        _ => usage(),
    };

    println!("{}", classification.describe(kind));
    if let Classification::Matched { entry, distance, .. } = classification {
        println!("  swatch: {}  (distance {distance:.1})", entry.color);
    }
    Ok(())
}
