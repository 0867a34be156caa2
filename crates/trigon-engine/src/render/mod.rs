//! GPU rendering subsystem.
//!
//! Geometry is given directly in normalized device coordinates; there is no
//! camera or viewport transform. Each renderer owns its GPU resources
//! (pipeline, buffers) and creates them lazily on first use.

mod ctx;
mod mesh;
mod polygon;
mod program;
mod triangle;
mod vertex;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{Mesh, MeshData};
pub use polygon::PolygonMode;
pub use program::{capabilities_for, check_stage, check_stage_with, ShaderProgram, StageModule};
pub use triangle::TriangleRenderer;
pub use vertex::{ColorVertex, PositionVertex, Vertex};
