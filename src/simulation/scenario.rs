//! Build fully-initialized collision scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - the arena walls (`Arena`)
//! - numerical parameters (`Parameters`)
//! - the body store, spawned without overlap (`BodyStore`)
//! - the optional background image path
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and drawing systems

use std::f64::consts::TAU;

use bevy::log::{debug, info};
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{rng, Rng, SeedableRng};

use crate::configuration::config::{BodiesConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::engine::{step_frame, StepStats};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Arena, Body, BodyColor, BodyStore, NVec2};

/// Each color channel is drawn from this range, which keeps bodies visible
/// against both dark and light backgrounds.
const COLOR_CHANNEL_MIN: u8 = 50;
const COLOR_CHANNEL_MAX: u8 = 250;

/// Bevy resource representing a fully-initialized collision scenario
#[derive(Resource, Debug)]
pub struct Scenario {
    pub arena: Arena,
    pub parameters: Parameters,
    pub store: BodyStore,
    pub background: Option<String>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        let arena = Arena::new(cfg.arena.width, cfg.arena.height)?;

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            seed: p_cfg.seed,
            max_placement_attempts: p_cfg.max_placement_attempts,
        };

        // The generator is owned here and only lent to the spawner, so a fixed
        // seed reproduces the same layout
        let mut rng: StdRng = match parameters.seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };

        let store = spawn_bodies(&mut rng, &arena, &cfg.bodies, parameters.max_placement_attempts)?;

        info!(
            "scenario: {} bodies (r = {}, m = {}) in {} x {} arena, h0 = {} s",
            store.len(),
            cfg.bodies.radius,
            cfg.bodies.mass,
            arena.width,
            arena.height,
            parameters.h0,
        );

        Ok(Self {
            arena,
            parameters,
            store,
            background: cfg.background,
        })
    }

    /// Advance through one rendered frame of `frame_dt` seconds
    pub fn step(&mut self, frame_dt: f64) -> StepStats {
        step_frame(&mut self.store, &self.arena, frame_dt, self.parameters.h0)
    }
}

/// Spawn `bodies.count` identical bodies at random non-overlapping positions.
///
/// Every center lies in `[r, W - r] x [r, H - r]`. Candidates are redrawn
/// until they clear every body placed before them. With `max_attempts` unset
/// this retries forever, so a crowded arena blocks; with a cap, running out
/// of attempts is `Error::PlacementFailed`.
///
/// Each body moves at `bodies.average_speed` in a uniformly random direction.
/// A radius that is not positive, or that does not fit the arena, is
/// `Error::InvalidParam`.
pub fn spawn_bodies<R: Rng + ?Sized>(
    rng: &mut R,
    arena: &Arena,
    bodies: &BodiesConfig,
    max_attempts: Option<u64>,
) -> Result<BodyStore> {
    let radius = bodies.radius;
    if !(radius.is_finite() && radius > 0.0) {
        return Err(Error::InvalidParam(format!("radius must be positive and finite, got {radius}")));
    }
    if 2.0 * radius > arena.width || 2.0 * radius > arena.height {
        return Err(Error::InvalidParam(format!(
            "a body of radius {radius} does not fit a {} x {} arena",
            arena.width, arena.height
        )));
    }

    let mut placed = BodyStore::reserve(bodies.count)?;

    for index in 0..bodies.count {
        let color = BodyColor::opaque(
            rng.random_range(COLOR_CHANNEL_MIN..=COLOR_CHANNEL_MAX),
            rng.random_range(COLOR_CHANNEL_MIN..=COLOR_CHANNEL_MAX),
            rng.random_range(COLOR_CHANNEL_MIN..=COLOR_CHANNEL_MAX),
        );

        let mut attempts: u64 = 0;
        let x = loop {
            if let Some(cap) = max_attempts {
                if attempts >= cap {
                    return Err(Error::PlacementFailed { index, attempts });
                }
            }
            attempts += 1;

            let candidate = NVec2::new(
                rng.random_range(radius..=arena.width - radius),
                rng.random_range(radius..=arena.height - radius),
            );
            if !overlaps_existing(&placed, &candidate, radius) {
                break candidate;
            }
        };
        if attempts > 1 {
            debug!("body {index} placed after {attempts} attempts");
        }

        let angle = rng.random_range(0.0..TAU);
        let v = bodies.average_speed * NVec2::new(angle.cos(), angle.sin());

        placed.push(Body::new(x, v, bodies.mass, radius, color)?);
    }

    Ok(BodyStore::from_bodies(placed))
}

fn overlaps_existing(existing: &[Body], x: &NVec2, radius: f64) -> bool {
    existing
        .iter()
        .any(|b| (x - b.x).norm() < radius + b.radius)
}
