//! Shared pieces of the triangle lessons.
//!
//! | Binary | Shows |
//! |--------|-------|
//! | `draw-triangle` | one triangle, vertex buffer only, fixed color |
//! | `indexed-draw` | a small fan drawn through an index buffer, wireframe |
//! | `shader-file` | per-vertex colors, shaders split out of one file |
//!
//! Keys: `W` toggles wireframe, `Escape` quits.

pub mod config;
pub mod lesson;
pub mod meshes;
pub mod shaders;

pub use config::LessonConfig;
pub use lesson::{run, Lesson};
