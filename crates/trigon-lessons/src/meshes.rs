//! Geometry for the lessons, in normalized device coordinates.

use trigon_engine::paint::Color;
use trigon_engine::render::{ColorVertex, MeshData, PositionVertex};

/// One triangle, drawn straight from the vertex buffer.
pub fn triangle() -> MeshData<PositionVertex> {
    MeshData::non_indexed([
        PositionVertex::new(-0.5, -0.5, 0.0),
        PositionVertex::new(0.5, -0.5, 0.0),
        PositionVertex::new(0.0, 0.5, 0.0),
    ])
}

/// Six triangles fanned around the origin plus two forming a peak on top.
///
/// Eight vertices shared by 24 indices; the index buffer is what keeps the
/// centre vertex from being repeated six times.
pub fn fan() -> MeshData<PositionVertex> {
    let vertices = [
        PositionVertex::new(0.0, 0.0, 0.0),   // 0 centre
        PositionVertex::new(0.5, 0.5, 0.0),   // 1
        PositionVertex::new(0.5, -0.5, 0.0),  // 2
        PositionVertex::new(0.0, -0.5, 0.0),  // 3
        PositionVertex::new(-0.5, -0.5, 0.0), // 4
        PositionVertex::new(-0.5, 0.5, 0.0),  // 5
        PositionVertex::new(0.0, 0.5, 0.0),   // 6
        PositionVertex::new(0.0, 0.75, 0.0),  // 7 peak
    ];

    #[rustfmt::skip]
    let indices: [u32; 24] = [
        0, 1, 2,
        0, 2, 3,
        0, 3, 4,
        0, 4, 5,
        0, 5, 6,
        0, 6, 1,
        5, 7, 6,
        1, 7, 6,
    ];

    MeshData::indexed(vertices, indices)
}

/// Red, green and blue corners; the rasterizer blends between them.
pub fn rgb_triangle() -> MeshData<ColorVertex> {
    let vertices = [
        // bottom right
        ColorVertex::new([0.5, -0.5, 0.0], Color::RED.to_rgb_array()),
        // bottom left
        ColorVertex::new([-0.5, -0.5, 0.0], Color::GREEN.to_rgb_array()),
        // top
        ColorVertex::new([0.0, 0.5, 0.0], Color::BLUE.to_rgb_array()),
    ];

    MeshData::indexed(vertices, [0u32, 1, 2])
}
