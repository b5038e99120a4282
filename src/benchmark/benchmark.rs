//! Wall-clock timing of the step driver.
//!
//! Pair checks are all-pairs, so cost per sub-step grows as N^2; these runs
//! show where a frame stops fitting in 16 ms.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::BodiesConfig;
use crate::error::Result;
use crate::simulation::engine::{step_frame, substep};
use crate::simulation::scenario::spawn_bodies;
use crate::simulation::states::{Arena, BodyStore};

const RADIUS: f64 = 2.0;
const H0: f64 = 0.005;

/// Arena sized so bodies cover about 5% of its area, whatever `n` is
fn make_store(n: usize) -> Result<(BodyStore, Arena)> {
    let covered = n as f64 * std::f64::consts::PI * RADIUS * RADIUS;
    let side = (covered / 0.05).sqrt().max(4.0 * RADIUS);
    let arena = Arena::new(side, side)?;

    let bodies = BodiesConfig {
        count: n,
        radius: RADIUS,
        mass: 1.0,
        average_speed: 50.0,
    };
    let mut rng = StdRng::seed_from_u64(42);
    let store = spawn_bodies(&mut rng, &arena, &bodies, Some(1_000_000))?;
    Ok((store, arena))
}

/// Average time of one sub-step for a range of body counts
pub fn bench_substep() -> Result<()> {
    let ns = [10, 50, 100, 200, 400, 800, 1600];
    let steps = 50;

    for n in ns {
        let (mut store, arena) = make_store(n)?;

        // Warm-up
        substep(&mut store, &arena, H0);

        let t0 = Instant::now();
        let mut collisions = 0;
        for _ in 0..steps {
            collisions += substep(&mut store, &arena, H0).pair_collisions;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, substep = {:10.6} ms, collisions = {collisions}", per_step * 1000.0);
    }
    Ok(())
}

/// Time a full 60 Hz frame (several sub-steps) per body count.
/// CSV output, paste into a spreadsheet to graph
pub fn bench_frame_curve() -> Result<()> {
    let frame_dt = 1.0 / 60.0;
    println!("N,frame_ms");

    for n in (100..=2000).step_by(100) {
        let (mut store, arena) = make_store(n)?;

        // Large n: fewer frames to keep runtime down
        let frames = if n <= 800 { 10 } else { 2 };

        let t0 = Instant::now();
        for _ in 0..frames {
            step_frame(&mut store, &arena, frame_dt, H0);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("{n},{ms:.6}");
    }
    Ok(())
}
