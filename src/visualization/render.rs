//! What the renderer is allowed to see of a scenario.
//!
//! The simulation works in `f64` arena pixels with y pointing down. Drawing
//! uses whole pixels, so centers and radii are truncated to `i32` here and
//! the viewer only ever consumes these values.

use crate::simulation::states::{Arena, Body, BodyColor, BodyStore};

/// One filled circle per body per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleDraw {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub color: BodyColor,
}

/// The arena outline, drawn from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryDraw {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

pub fn circle_draw(b: &Body) -> CircleDraw {
    CircleDraw {
        x: b.x.x as i32,
        y: b.x.y as i32,
        radius: b.radius as i32,
        color: b.color,
    }
}

pub fn circle_draws(store: &BodyStore) -> impl Iterator<Item = CircleDraw> + '_ {
    store.bodies().iter().map(circle_draw)
}

pub fn boundary_draw(arena: &Arena) -> BoundaryDraw {
    BoundaryDraw {
        x: 0,
        y: 0,
        width: arena.width as i32,
        height: arena.height as i32,
    }
}
