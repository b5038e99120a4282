//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed physics sub-step size,
//! - random seed for body placement,
//! - optional retry cap for overlap-free placement

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // sub-step size, seconds
    pub seed: Option<u64>, // None -> seeded from entropy
    pub max_placement_attempts: Option<u64>, // None -> retry until placed
}
