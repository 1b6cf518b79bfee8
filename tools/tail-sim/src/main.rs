//! Headless swimming simulation
//!
//! Spawns a koi from a species blueprint, swims it at a fixed simulation rate
//! while "displaying" at an independent frame rate, and exports the last
//! rendered frame.

mod export;
mod swim;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use koi_appendage::blueprint::Species;
use koi_appendage::{AppendageConfig, FixedTimestep, MeshArena, PatternRegion};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use swim::SwimCycle;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML). Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Species blueprint to spawn
    #[arg(long, default_value = "common")]
    species: Species,

    /// Seed for the blueprint random source
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Simulated wall-clock time in seconds
    #[arg(long, default_value_t = 2.0, value_parser = parse_seconds)]
    seconds: f32,

    /// Display frame rate, independent of the simulation tick rate
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Write the last frame as Wavefront OBJ
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Write the last frame as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Longest run accepted on the command line
const MAX_SECONDS: f32 = 3600.0;

fn parse_seconds(s: &str) -> std::result::Result<f32, String> {
    let seconds: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if !(0.0..=MAX_SECONDS).contains(&seconds) {
        return Err(format!("must be between 0 and {}, got {}", MAX_SECONDS, s));
    }
    Ok(seconds)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppendageConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppendageConfig::default(),
    };

    let mut rng = Pcg32::seed_from_u64(args.seed);
    let mut fish = args
        .species
        .blueprint()
        .spawn_fish(&config, Vec2::ZERO, PatternRegion::default(), &mut rng)
        .context("Failed to spawn fish")?;

    tracing::info!(
        "Spawned {} koi: {} vertebrae, {} tail anchors",
        args.species,
        fish.spine().len(),
        fish.tail().anchors()
    );

    let mut clock = FixedTimestep::from_config(&config.simulation)?;
    let mut swim = SwimCycle::new(fish.controls().points());
    let mut arena = MeshArena::with_capacity(fish.vertex_count() as usize, 0);

    let frame = Duration::from_secs_f64(1.0 / args.fps as f64);
    let frames = (args.seconds * args.fps as f32).round() as u32;
    let mut total_ticks = 0u32;

    for _ in 0..frames {
        for _ in 0..clock.advance(frame) {
            swim.step(fish.controls_mut().points_mut());
            fish.tick().context("Simulation tick failed")?;
            total_ticks += 1;
        }

        arena.clear();
        fish.render(&mut arena, clock.interpolation())
            .context("Render failed")?;
    }

    tracing::info!(
        "Simulated {} frames, {} ticks: {} vertices, {} triangles",
        frames,
        total_ticks,
        arena.vertices().len(),
        arena.indices().len() / 3
    );

    if let Some(path) = &args.obj {
        export::write_obj(&arena, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }

    if let Some(path) = &args.json {
        let dump = export::FrameDump::new(args.species, total_ticks, clock.interpolation(), &arena);
        export::write_json(&dump, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("2.5"), Ok(2.5));
        assert_eq!(parse_seconds("0"), Ok(0.0));
        for bad in ["inf", "-inf", "NaN", "-1", "1e9", "soon"] {
            assert!(parse_seconds(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_args_reject_unbounded_runs() {
        assert!(Args::try_parse_from(["tail-sim", "--seconds", "inf"]).is_err());
        assert!(Args::try_parse_from(["tail-sim", "--fps", "0"]).is_err());

        let args = Args::try_parse_from(["tail-sim", "--seconds", "3", "--fps", "60"]).unwrap();
        assert_eq!(args.seconds, 3.0);
        assert_eq!(args.fps, 60);
    }
}
