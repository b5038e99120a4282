//! Contact response for the collision engine
//!
//! Two resolvers, both pure functions over the bodies they are handed:
//! - [`resolve_wall`]: clamp a body back inside the arena and reflect the
//!   velocity component of every axis it crossed
//! - [`resolve_pair`]: 2D elastic collision between two overlapping bodies,
//!   followed by a positional push-apart along the contact normal

use crate::simulation::states::{Arena, Body, NVec2};

/// Resolve wall contacts for one body.
///
/// Each axis is checked independently, so a body in a corner can be corrected
/// on x and y in the same call. On a single axis the near and far wall are
/// mutually exclusive. Returns `true` if any correction was applied.
pub fn resolve_wall(body: &mut Body, arena: &Arena) -> bool {
    let mut hit = false;

    for k in 0..2 {
        let bound = arena.bound(k);

        if body.x[k] - body.radius < 0.0 {
            // pin tangent to the near wall
            body.x[k] = body.radius;
            body.v[k] = -body.v[k];
            hit = true;
        } else if body.x[k] + body.radius > bound {
            // pin tangent to the far wall
            body.x[k] = bound - body.radius;
            body.v[k] = -body.v[k];
            hit = true;
        }
    }

    hit
}

/// Resolve an elastic collision between two distinct bodies.
///
/// Does nothing unless the circles overlap. Coincident centers have no
/// contact normal and are left untouched. Must be called at most once per
/// unordered pair per sub-step: a second call would reflect the normal
/// velocities back.
///
/// Returns `true` if a response was applied.
pub fn resolve_pair(b1: &mut Body, b2: &mut Body) -> bool {
    // d points from b1 to b2
    let d = b2.x - b1.x;
    let dist = d.norm();
    let r_sum = b1.radius + b2.radius;

    if dist >= r_sum || dist == 0.0 {
        return false;
    }

    // Contact frame: unit normal along the centers, tangent perpendicular to it
    let n = d / dist;
    let t = NVec2::new(-n.y, n.x);

    // Scalar components of each velocity in the contact frame
    let v1n = b1.v.dot(&n);
    let v1t = b1.v.dot(&t);
    let v2n = b2.v.dot(&n);
    let v2t = b2.v.dot(&t);

    // 1D elastic collision along the normal; tangential parts are untouched
    let (m1, m2) = (b1.m, b2.m);
    let m_sum = m1 + m2;
    let v1n_new = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / m_sum;
    let v2n_new = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / m_sum;

    b1.v = v1n_new * n + v1t * t;
    b2.v = v2n_new * n + v2t * t;

    // Split the overlap evenly so the circles end up exactly touching
    let overlap = r_sum - dist;
    b1.x -= 0.5 * overlap * n;
    b2.x += 0.5 * overlap * n;

    true
}
