//! Fixed-step position integrator
//!
//! Bodies feel no forces between contacts, so a sub-step is a pure drift:
//! x_n+1 = x_n + dt * v_n, with velocities left untouched. Wall and body
//! contacts are handled afterwards in `collisions`.

use super::states::BodyStore;

/// Advance every body's position by `v * dt`. No clamping, no contact tests.
pub fn euler_drift(store: &mut BodyStore, dt: f64) {
    for b in store.bodies_mut().iter_mut() {
        b.x += dt * b.v;
    }
}
