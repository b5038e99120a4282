pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Error, Result};

pub use simulation::states::{Arena, Body, BodyColor, BodyStore, NVec2};
pub use simulation::params::Parameters;
pub use simulation::collisions::{resolve_pair, resolve_wall};
pub use simulation::integrator::euler_drift;
pub use simulation::engine::{step_frame, substep, substep_count, StepStats, MAX_SUBSTEPS_PER_FRAME};
pub use simulation::scenario::{spawn_bodies, Scenario};

pub use configuration::config::{ArenaConfig, BodiesConfig, ParametersConfig, ScenarioConfig};

pub use visualization::render::{boundary_draw, circle_draw, circle_draws, BoundaryDraw, CircleDraw};
pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_frame_curve, bench_substep};
