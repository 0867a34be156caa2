use anyhow::{ensure, Result};
use wgpu::util::DeviceExt;

use super::vertex::Vertex;

/// CPU-side geometry: a vertex list plus an optional `u32` index list.
///
/// Without indices the vertices are drawn in order, three per triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData<V> {
    pub vertices: Vec<V>,
    pub indices: Option<Vec<u32>>,
}

impl<V: Vertex> MeshData<V> {
    pub fn non_indexed(vertices: impl Into<Vec<V>>) -> Self {
        Self {
            vertices: vertices.into(),
            indices: None,
        }
    }

    pub fn indexed(vertices: impl Into<Vec<V>>, indices: impl Into<Vec<u32>>) -> Self {
        Self {
            vertices: vertices.into(),
            indices: Some(indices.into()),
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Number of vertices the draw call consumes (index count when indexed).
    pub fn draw_count(&self) -> u32 {
        match &self.indices {
            Some(indices) => indices.len() as u32,
            None => self.vertices.len() as u32,
        }
    }

    /// Checks the mesh describes whole triangles over existing vertices.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.vertices.is_empty(), "mesh has no vertices");
        ensure!(
            self.draw_count() % 3 == 0,
            "mesh draws {} vertices, not a whole number of triangles",
            self.draw_count()
        );

        if let Some(indices) = &self.indices {
            let len = self.vertices.len();
            if let Some(bad) = indices.iter().find(|&&i| i as usize >= len) {
                anyhow::bail!("index {bad} out of range for {len} vertices");
            }
        }

        Ok(())
    }
}

/// GPU buffers for one [`MeshData`].
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_buffer: Option<(wgpu::Buffer, u32)>,
}

impl Mesh {
    /// Uploads `data` into static vertex (and index) buffers.
    pub fn upload<V: Vertex>(device: &wgpu::Device, label: &str, data: &MeshData<V>) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = data.indices.as_ref().map(|indices| {
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} ibo")),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            (buffer, indices.len() as u32)
        });

        log::debug!(
            "{label}: uploaded {} vertices, {} indices",
            data.vertices.len(),
            index_buffer.as_ref().map_or(0, |(_, n)| *n)
        );

        Self {
            vertex_buffer,
            vertex_count: data.vertices.len() as u32,
            index_buffer,
        }
    }

    /// Binds the buffers and issues the draw. The pipeline must already be set.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        match &self.index_buffer {
            Some((ibo, count)) => {
                rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..*count, 0, 0..1);
            }
            None => rpass.draw(0..self.vertex_count, 0..1),
        }
    }
}
