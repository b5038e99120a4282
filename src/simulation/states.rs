//! Core state types for the collision simulation.
//!
//! - `Body`      one circular body (position, velocity, mass, radius, color)
//! - `BodyStore` fixed-length, owned sequence of bodies
//! - `Arena`     the walled rectangle `[0, width] x [0, height]`
//!
//! Positions and velocities are `f64`; single precision drifts visibly over
//! many sub-steps.

use nalgebra::Vector2;

use crate::error::{Error, Result};

pub type NVec2 = Vector2<f64>;

/// Display color, RGBA bytes. Has no effect on physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl BodyColor {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position (center)
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // radius
    pub color: BodyColor,
}

impl Body {
    /// Create a body after validating that radius and mass are finite and positive.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: BodyColor) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if !m.is_finite() || m <= 0.0 {
            return Err(Error::InvalidParam("mass must be finite and > 0".into()));
        }
        if !(x.iter().all(|c| c.is_finite()) && v.iter().all(|c| c.is_finite())) {
            return Err(Error::InvalidParam("position and velocity must be finite".into()));
        }
        Ok(Self { x, v, m, radius, color })
    }

    /// 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// True if the two circles strictly overlap.
    pub fn overlaps(&self, other: &Body) -> bool {
        (other.x - self.x).norm() < self.radius + other.radius
    }
}

/// Owned, contiguous collection of bodies whose length is fixed at construction.
///
/// Exposes slices only, so nothing can add or remove a body during a run.
#[derive(Debug, Clone)]
pub struct BodyStore {
    bodies: Box<[Body]>,
}

impl BodyStore {
    /// Reserve room for exactly `count` bodies, reporting allocation failure
    /// instead of aborting.
    pub(crate) fn reserve(count: usize) -> Result<Vec<Body>> {
        let mut bodies = Vec::new();
        bodies
            .try_reserve_exact(count)
            .map_err(|_| Error::Allocation { count })?;
        Ok(bodies)
    }

    pub fn from_bodies(bodies: Vec<Body>) -> Self {
        Self { bodies: bodies.into_boxed_slice() }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.m * b.v)
    }
}

/// Axis-aligned walls `[0, width] x [0, height]`, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(Error::InvalidParam("arena width and height must be finite and > 0".into()));
        }
        Ok(Self { width, height })
    }

    /// Bound along axis `k` (0 = x, 1 = y).
    #[inline]
    pub fn bound(&self, k: usize) -> f64 {
        if k == 0 { self.width } else { self.height }
    }

    /// True if a circle at `x` with `radius` lies fully inside the walls.
    pub fn contains(&self, x: &NVec2, radius: f64) -> bool {
        (0..2).all(|k| x[k] >= radius && x[k] <= self.bound(k) - radius)
    }
}
