//! clearpath — pollution-aware route comparison for a single query.
//!
//! Prompts for two free-text locations, fetches the drivable road network
//! around the start point, annotates it with deterministic synthetic
//! pollution, computes the shortest-by-length and fastest-by-time routes,
//! scores both by average pollution, and writes an interactive map plus
//! per-route CSV exports.
//!
//! Run with:
//!   cargo run -p clearpath-cli
//!
//! Set `RUST_LOG=debug` to see the provider traffic.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use cp_core::config::{DEFAULT_RADIUS_M, DEFAULT_SEED, DEFAULT_ZOOM};
use cp_core::{QueryConfig, SeededRng};
use cp_pollution::{annotate_network, average_pollution, recommend};
use cp_providers::{Geocoder, NetworkFetcher, ResolvedLocation};
use cp_render::panels::{legend_html, summary_panel_html};
use cp_render::{route_points, write_route_csv, MapDocument};
use cp_spatial::{find_route_pair, DijkstraRouter, Route};

// ── Rendering constants ───────────────────────────────────────────────────────

const SHORTEST_ROUTE_COLOR: &str = "blue";
const FASTEST_ROUTE_COLOR:  &str = "red";
const ENDPOINT_CIRCLE_COLOR: &str = "blue";
const ROUTE_WEIGHT_PX: u8 = 5;
const ENDPOINT_CIRCLE_RADIUS_M: f32 = 500.0;

// ── CLI options ───────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "clearpath", version, about = "Compare two routes by synthetic pollution")]
struct Args {
    /// Road-network fetch radius around the start point, metres.
    #[arg(long, default_value_t = DEFAULT_RADIUS_M)]
    radius_m: f32,

    /// Pollution RNG seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Initial map zoom level.
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    zoom: u8,

    /// Directory for the map and route exports.
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = QueryConfig {
        radius_m: args.radius_m,
        seed: args.seed,
        zoom: args.zoom,
    };
    config.validate()?;

    let geocoder = Geocoder::new()?;

    // 1. Collect both endpoints; `exit` at either prompt ends the session
    //    immediately with no further output.
    let Some(start) = prompt_location(&geocoder, "Enter starting location or 'exit' to quit: ")?
    else {
        return Ok(());
    };
    let Some(end) = prompt_location(&geocoder, "Enter ending location or 'exit' to quit: ")?
    else {
        return Ok(());
    };

    // 2. Fetch the road network around the start point.
    let fetcher = NetworkFetcher::new()?;
    let mut network = fetcher.fetch(start.point, config.radius_m)?;
    println!(
        "Road network: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );

    // 3. Annotate pollution from the configured seed.
    let mut rng = SeededRng::new(config.seed);
    annotate_network(&mut network, &mut rng);

    // 4. Compute both routes over the same snapped node pair.
    let pair = match find_route_pair(&network, &DijkstraRouter, start.point, end.point) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Could not produce a route: {e}");
            std::process::exit(1);
        }
    };

    // 5. Score both routes and pick the lower-pollution one.
    let (Some(shortest_score), Some(fastest_score)) = (
        average_pollution(&pair.shortest, &network),
        average_pollution(&pair.fastest, &network),
    ) else {
        eprintln!("Could not score the computed routes.");
        std::process::exit(1);
    };
    let pick = recommend(shortest_score, fastest_score);

    // 6. Assemble the map: both routes, endpoint circles, legend, summary.
    let mut map = MapDocument::new(start.point, config.zoom);
    map.add_polyline(
        &route_points(&pair.shortest, &network),
        SHORTEST_ROUTE_COLOR,
        ROUTE_WEIGHT_PX,
    );
    map.add_polyline(
        &route_points(&pair.fastest, &network),
        FASTEST_ROUTE_COLOR,
        ROUTE_WEIGHT_PX,
    );
    for point in [start.point, end.point] {
        map.add_circle(point, ENDPOINT_CIRCLE_RADIUS_M, ENDPOINT_CIRCLE_COLOR);
    }
    map.add_overlay(&legend_html());
    map.add_overlay(&summary_panel_html(shortest_score, fastest_score, pick));

    // 7. Write artifacts.
    fs::create_dir_all(&args.out_dir)?;
    let map_path = args.out_dir.join("route_map.html");
    map.write_html(&map_path)?;
    write_route_csv(&args.out_dir.join("shortest_route.csv"), &pair.shortest, &network)?;
    write_route_csv(&args.out_dir.join("fastest_route.csv"), &pair.fastest, &network)?;

    // 8. Console summary.
    println!();
    println!("{:<10} {:>6} {:>10} {:>10} {:>10}", "Route", "Nodes", "Length", "Travel", "Pollution");
    println!("{}", "-".repeat(50));
    print_route_row("Shortest", &pair.shortest, shortest_score);
    print_route_row("Fastest", &pair.fastest, fastest_score);
    println!();
    println!("Recommended route: {pick} (lower pollution)");
    println!("Map written to {}", map_path.display());

    Ok(())
}

fn print_route_row(label: &str, route: &Route, score: f64) {
    println!(
        "{:<10} {:>6} {:>8.2} km {:>6.1} min {:>7.2}",
        label,
        route.len(),
        route.total_length_m / 1_000.0,
        route.total_travel_secs / 60.0,
        score,
    );
}

// ── Interactive prompts ───────────────────────────────────────────────────────

/// Prompt until the geocoder resolves a location.
///
/// Returns `None` when the user types `exit` (or stdin closes), which the
/// caller treats as an immediate, silent end of session.  Unresolvable
/// queries re-prompt without bound.
fn prompt_location(geocoder: &Geocoder, prompt: &str) -> Result<Option<ResolvedLocation>> {
    let stdin = io::stdin();
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF behaves like an explicit exit.
            return Ok(None);
        }
        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }
        if query.is_empty() {
            continue;
        }

        match geocoder.resolve(query)? {
            Some(location) => {
                println!("Location found: {}", location.display_name);
                println!(
                    "Latitude: {}, Longitude: {}",
                    location.point.lat, location.point.lon
                );
                return Ok(Some(location));
            }
            None => {
                println!("Location not found. Please try again with a different query.");
            }
        }
    }
}
