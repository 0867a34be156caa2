//! Trigon engine crate.
//!
//! Owns the window + GPU runtime and the small amount of render plumbing the
//! lessons share: vertex layouts, meshes, shader programs and a triangle
//! renderer.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod paint;
pub mod render;
