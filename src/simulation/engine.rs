//! Frame stepping for the collision engine
//!
//! A rendered frame of arbitrary length is split into fixed physics
//! sub-steps of size `h0`. Each sub-step runs, in order:
//! 1. drift every body
//! 2. wall contacts for every body
//! 3. body contacts for every unordered pair (i < j), each pair once

use super::collisions::{resolve_pair, resolve_wall};
use super::integrator::euler_drift;
use super::states::{Arena, BodyStore};

/// Counters collected while stepping, mainly for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub substeps: usize, // sub-steps executed
    pub pair_checks: usize, // unordered pairs tested
    pub pair_collisions: usize, // pairs that received a response
    pub wall_contacts: usize, // bodies corrected by a wall
}

impl StepStats {
    fn absorb(&mut self, other: StepStats) {
        self.substeps += other.substeps;
        self.pair_checks += other.pair_checks;
        self.pair_collisions += other.pair_collisions;
        self.wall_contacts += other.wall_contacts;
    }
}

/// Upper bound on sub-steps in one frame. A stalled frame (debugger pause,
/// suspended window) is cut short instead of freezing the loop.
pub const MAX_SUBSTEPS_PER_FRAME: usize = 100_000;

/// Number of sub-steps for a frame: `floor(frame_dt / h0)`, but never less
/// than one, so every rendered frame shows motion. Frames shorter than `h0`
/// therefore run slightly slow.
pub fn substep_count(frame_dt: f64, h0: f64) -> usize {
    let steps = (frame_dt / h0).floor();
    if !steps.is_finite() {
        return 1;
    }
    // negative values cast to 0
    (steps as usize).clamp(1, MAX_SUBSTEPS_PER_FRAME)
}

/// Run one fixed sub-step of size `h0` over the whole store.
pub fn substep(store: &mut BodyStore, arena: &Arena, h0: f64) -> StepStats {
    let mut stats = StepStats { substeps: 1, ..Default::default() };

    euler_drift(store, h0);

    for b in store.bodies_mut().iter_mut() {
        if resolve_wall(b, arena) {
            stats.wall_contacts += 1;
        }
    }

    let bodies = store.bodies_mut();
    let n = bodies.len();
    for i in 0..n {
        // split so body i and body j can be borrowed mutably together
        let (head, tail) = bodies.split_at_mut(i + 1);
        let bi = &mut head[i];

        for bj in tail.iter_mut() {
            stats.pair_checks += 1;
            if bi.overlaps(bj) && resolve_pair(bi, bj) {
                stats.pair_collisions += 1;
            }
        }
    }

    stats
}

/// Advance the store through one rendered frame of length `frame_dt`.
pub fn step_frame(store: &mut BodyStore, arena: &Arena, frame_dt: f64, h0: f64) -> StepStats {
    let mut stats = StepStats::default();
    for _ in 0..substep_count(frame_dt, h0) {
        stats.absorb(substep(store, arena, h0));
    }
    stats
}
