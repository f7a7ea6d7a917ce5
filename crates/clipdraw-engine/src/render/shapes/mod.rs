//! Primitive renderers.

mod common;

pub mod mesh;
pub mod points;
