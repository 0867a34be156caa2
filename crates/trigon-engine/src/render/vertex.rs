use bytemuck::{Pod, Zeroable};

/// A vertex type that can be uploaded as-is into a vertex buffer.
pub trait Vertex: Pod {
    /// Attribute list; shader locations start at 0.
    const ATTRIBUTES: &'static [wgpu::VertexAttribute];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Position-only vertex: `@location(0) position: vec3<f32>`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl PositionVertex {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

impl Vertex for PositionVertex {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] =
        &wgpu::vertex_attr_array![0 => Float32x3];
}

/// Position + color vertex.
///
/// `@location(0) position: vec3<f32>`, `@location(1) color: vec3<f32>`;
/// the color is interpolated across the triangle.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

impl Vertex for ColorVertex {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_vertex_layout() {
        let layout = PositionVertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn color_vertex_layout() {
        let layout = ColorVertex::layout();
        assert_eq!(layout.array_stride, 24);
        let locs: Vec<_> = layout
            .attributes
            .iter()
            .map(|a| (a.shader_location, a.offset))
            .collect();
        assert_eq!(locs, vec![(0, 0), (1, 12)]);
    }

    #[test]
    fn vertices_cast_to_tightly_packed_floats() {
        let v = [ColorVertex::new([1.0, 2.0, 3.0], [0.1, 0.2, 0.3])];
        let floats: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
    }
}
