//! bbox-cli: build a bounding box, optionally refit it to a point set, and
//! print its exported fields as JSON.
//!
//! ```text
//! bbox-cli corners 50.8503,4.3517 50.4674,4.8720
//! bbox-cli center 50.65914,4.612911 18470.468 --shrink points.csv
//! bbox-cli corners 50.8503,4.3517 50.4674,4.8720 --random 20 --seed 7 -v
//! ```
//!
//! Log level defaults to `info` (`debug` with `-v`); `RUST_LOG` overrides it.

mod sample;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{LevelFilter, info, warn};

use geo_bbox::{GeoBoundingBox, load_points_csv};
use geo_core::GeoPoint;

fn cli() -> Command {
    Command::new("bbox-cli")
        .about("Build, refit, and export lat/lon bounding boxes")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("shrink")
                .long("shrink")
                .help("CSV file (lat,lon header) of points to refit the box to")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .help("Refit the box to N seeded random points around it")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for --random")
                .value_parser(value_parser!(u64))
                .default_value("42")
                .global(true),
        )
        .subcommand(
            Command::new("corners")
                .about("Box from top-left and bottom-right corners")
                .arg(point_arg("top_left", "Top-left corner as lat,lon"))
                .arg(point_arg("bottom_right", "Bottom-right corner as lat,lon")),
        )
        .subcommand(
            Command::new("center")
                .about("Box enclosing a circle around a center point")
                .arg(point_arg("center", "Center as lat,lon"))
                .arg(
                    Arg::new("meters")
                        .help("Radius in meters")
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(value_parser!(f64)),
                ),
        )
}

fn point_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).required(true).allow_hyphen_values(true)
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn build(matches: &ArgMatches) -> Result<GeoBoundingBox> {
    let point = |m: &ArgMatches, id: &str| -> Result<GeoPoint> {
        let raw = m.get_one::<String>(id).map(String::as_str).unwrap_or_default();
        let p = GeoPoint::parse(raw).with_context(|| format!("parsing {id} {raw:?}"))?;
        if !raw.contains(',') {
            warn!("{id} {raw:?} has no comma; using 0,0");
        }
        if !p.is_valid() {
            warn!("{id} {p} is outside the WGS-84 range");
        }
        Ok(p)
    };

    match matches.subcommand() {
        Some(("corners", m)) => Ok(GeoBoundingBox::from_corners(
            point(m, "top_left")?,
            point(m, "bottom_right")?,
        )),
        Some(("center", m)) => {
            let meters = m.get_one::<f64>("meters").copied().unwrap_or_default();
            Ok(GeoBoundingBox::from_center_and_radius(point(m, "center")?, meters))
        }
        _ => bail!("expected a `corners` or `center` subcommand"),
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let mut bbox = build(&matches)?;

    let mut points = Vec::new();
    if let Some(path) = matches.get_one::<String>("shrink") {
        let loaded = load_points_csv(Path::new(path))
            .with_context(|| format!("loading points from {path}"))?;
        info!("loaded {} points from {path}", loaded.len());
        points.extend(loaded);
    }
    if let Some(&count) = matches.get_one::<usize>("random") {
        let seed = matches.get_one::<u64>("seed").copied().unwrap_or_default();
        points.extend(sample::scatter(&bbox, count, seed));
    }
    if matches.contains_id("shrink") || matches.contains_id("random") {
        bbox.shrink(&points);
    }

    if bbox.radius().is_nan() {
        warn!("radius did not converge and is reported as null");
    }
    if bbox.is_square_empty() {
        warn!("top-left and bottom-right are both 0,0");
    }
    info!("height {:.3} m, width {:.3} m", bbox.height(), bbox.width());

    let fields: BTreeMap<_, _> = bbox.export_fields().into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}
