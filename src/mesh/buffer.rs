use crate::foundation::core::{Point, Rgba8};

/// One output vertex: position, color, texture coordinates.
///
/// `#[repr(C)]` with no padding (20 bytes), so a `&[Vertex]` can be handed
/// to the GPU as-is via [`MeshBuffer::as_vertex_bytes`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in local space.
    pub position: [f32; 2],
    /// Straight-alpha vertex color.
    pub color: Rgba8,
    /// Texture coordinates in `[0, 1]` atlas space.
    pub uv: [f32; 2],
}

/// Triangulated output mesh: vertex sequence plus index triples.
///
/// The buffer is append-only while a generator runs. Generators clear it
/// before writing, so a caller-owned buffer can be reused across calls to
/// avoid reallocation without carrying state between them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    /// Ordered vertex sequence.
    pub vertices: Vec<Vertex>,
    /// Triangle index triples referencing `vertices`.
    pub triangles: Vec<[u16; 3]>,
}

impl MeshBuffer {
    /// Empty buffer with room for `vertices` vertices and `triangles` index
    /// triples.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Drop all geometry, keeping allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles currently in the buffer.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when no geometry has been emitted.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append one vertex.
    pub fn push_vert(&mut self, position: Point, color: Rgba8, uv: Point) {
        self.vertices.push(Vertex {
            position: [position.x as f32, position.y as f32],
            color,
            uv: [uv.x as f32, uv.y as f32],
        });
    }

    /// Append one triangle by vertex indices.
    pub fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.triangles.push([a, b, c]);
    }

    /// Raw vertex bytes for GPU upload.
    pub fn as_vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes (u16 triangle list) for GPU upload.
    pub fn as_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}
