pub mod render;
pub mod vis2d;
