//! Room visibility demo.
//!
//! Builds a room from the sample catalog, computes the visible region
//! from the given viewpoint and prints a summary, optionally emitting the
//! full result as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Default room from the room center
//! cargo run --bin room_visibility
//!
//! # A seeded random maze, as JSON
//! cargo run --bin room_visibility -- --room random-maze --seed 7 --json
//!
//! # With a config file
//! cargo run --bin room_visibility -- --config drishti.toml --x 120 --y 80
//! ```

use clap::Parser;
use drishti::{DrishtiError, Point, Room, RoomLayout, VisibilityConfig, VisibilityEngine};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "room_visibility", about = "Compute the visible region in a sample room")]
struct Args {
    /// Room to build: random-maze, maze, maze-2, shapes, shapes-2 or
    /// shapes-3
    #[arg(long, default_value = "maze")]
    room: String,

    /// Viewpoint x coordinate
    #[arg(long, default_value_t = 330.0)]
    x: f64,

    /// Viewpoint y coordinate
    #[arg(long, default_value_t = 330.0)]
    y: f64,

    /// Seed for the random maze room
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Optional TOML config file with engine tolerances
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full visibility result as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> drishti::Result<()> {
    let config = match &args.config {
        Some(path) => VisibilityConfig::load(path)?,
        None => VisibilityConfig::default(),
    };

    let room = Room::from_name(&args.room, args.seed).ok_or_else(|| {
        let known: Vec<&str> = Room::catalog(0).iter().map(Room::name).collect();
        DrishtiError::Config(format!(
            "unknown room {:?} (known rooms: {})",
            args.room,
            known.join(", ")
        ))
    })?;

    let walls = room.build(&RoomLayout::default());
    let viewpoint = Point::new(args.x, args.y);

    log::info!("room: {} ({} walls)", room.label(), walls.len());
    log::info!("viewpoint: ({}, {})", viewpoint.x, viewpoint.y);

    let engine = VisibilityEngine::new(config);
    let visibility = engine.compute(viewpoint, walls.walls())?;

    log::info!(
        "visible: {} arcs, {} polygon vertices",
        visibility.len(),
        visibility.polygon().len()
    );

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &visibility)?;
        println!();
    }

    Ok(())
}
